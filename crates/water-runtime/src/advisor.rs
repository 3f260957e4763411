//! Turns analysis facts and questionnaire answers into advice requests.

use water_core::error::Result;
use water_core::models::SummaryFacts;
use water_core::questionnaire::{FarmAnswers, ResidentialAnswers};

use crate::generator::{ChatRequest, TextGenerator};
use crate::prompts::{farm_prompt, faucet_prompt, residential_prompt, SYSTEM_INSTRUCTION};

/// What an advice panel shows after a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceState {
    /// Generator text, verbatim.
    Ready(String),
    /// User-visible error message.
    Failed(String),
}

impl AdviceState {
    /// Collapse a generator result into something displayable.
    pub fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(text) => AdviceState::Ready(text),
            Err(e) => AdviceState::Failed(e.user_message()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            AdviceState::Ready(text) | AdviceState::Failed(text) => text,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, AdviceState::Ready(_))
    }
}

/// Builds prompts and forwards them to an injected [`TextGenerator`].
pub struct AdviceRequester<G = Box<dyn TextGenerator>> {
    generator: G,
    system_instruction: String,
}

impl<G: TextGenerator> AdviceRequester<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }

    /// Advice for the faucet analysis summary.
    pub fn faucet_advice(&self, facts: &SummaryFacts) -> Result<String> {
        self.request("faucet", faucet_prompt(facts))
    }

    /// Advice for a residential questionnaire submission.
    pub fn residential_advice(&self, answers: &ResidentialAnswers) -> Result<String> {
        self.request("residential", residential_prompt(answers))
    }

    /// Advice for a farm questionnaire submission.
    pub fn farm_advice(&self, answers: &FarmAnswers) -> Result<String> {
        self.request("farm", farm_prompt(answers))
    }

    fn request(&self, kind: &str, prompt: String) -> Result<String> {
        let request = ChatRequest::new(self.system_instruction.clone(), prompt);
        match self.generator.complete(&request) {
            Ok(text) => {
                tracing::info!(kind, chars = text.len(), "advice received");
                Ok(text)
            }
            Err(e) => {
                tracing::warn!(kind, error = %e, "advice request failed");
                Err(e)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use water_core::error::DashboardError;
    use water_core::questionnaire::{CropType, SavingPractice};

    /// Records every request and replies with a fixed answer.
    struct ScriptedGenerator {
        reply: Option<String>,
        seen: RefCell<Vec<ChatRequest>>,
    }

    impl ScriptedGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for ScriptedGenerator {
        fn complete(&self, request: &ChatRequest) -> Result<String> {
            self.seen.borrow_mut().push(request.clone());
            self.reply
                .clone()
                .ok_or_else(|| DashboardError::ExternalService("offline".to_string()))
        }
    }

    fn facts() -> SummaryFacts {
        SummaryFacts {
            most_used_faucet: "garden".to_string(),
            peak_hour: "7 PM".to_string(),
            total_usage_liters: 120.5,
            peak_usage_liters: 60.25,
        }
    }

    #[test]
    fn test_faucet_advice_returns_text_verbatim() {
        let gen = ScriptedGenerator::replying("Water the garden at dawn.");
        let advisor = AdviceRequester::new(&gen);
        let advice = advisor.faucet_advice(&facts()).unwrap();
        assert_eq!(advice, "Water the garden at dawn.");
    }

    #[test]
    fn test_faucet_advice_sends_system_and_prompt() {
        let gen = ScriptedGenerator::replying("ok");
        AdviceRequester::new(&gen).faucet_advice(&facts()).unwrap();

        let seen = gen.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].messages[0].content, SYSTEM_INSTRUCTION);
        let prompt = seen[0].user_prompt().unwrap();
        assert!(prompt.contains("120.50 liters"));
        assert!(prompt.contains("7 PM with 60.25 liters"));
    }

    #[test]
    fn test_residential_advice_uses_answers() {
        let gen = ScriptedGenerator::replying("ok");
        let answers = ResidentialAnswers {
            practices: vec![SavingPractice::FaucetAerators],
            ..Default::default()
        };
        AdviceRequester::new(&gen).residential_advice(&answers).unwrap();
        let seen = gen.seen.borrow();
        assert!(seen[0].user_prompt().unwrap().contains("Faucet aerators"));
    }

    #[test]
    fn test_farm_advice_uses_answers() {
        let gen = ScriptedGenerator::replying("ok");
        let answers = FarmAnswers {
            crop: CropType::Soybeans,
            ..Default::default()
        };
        AdviceRequester::new(&gen).farm_advice(&answers).unwrap();
        let seen = gen.seen.borrow();
        assert!(seen[0].user_prompt().unwrap().contains("Crop Type: Soybeans"));
    }

    #[test]
    fn test_generator_failure_propagates() {
        let gen = ScriptedGenerator::failing();
        let err = AdviceRequester::new(&gen).faucet_advice(&facts()).unwrap_err();
        assert!(matches!(err, DashboardError::ExternalService(_)));
    }

    #[test]
    fn test_advice_state_from_result() {
        let ok = AdviceState::from_result(Ok("tip".to_string()));
        assert!(ok.is_ready());
        assert_eq!(ok.text(), "tip");

        let failed =
            AdviceState::from_result(Err(DashboardError::ExternalService("down".to_string())));
        assert!(!failed.is_ready());
        assert_eq!(failed.text(), "An error occurred: Advice service error: down");
    }
}
