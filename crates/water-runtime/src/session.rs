//! One "Analyze Faucet Data" run: pipeline plus advice, with the display
//! error policy applied.

use std::path::{Path, PathBuf};

use water_data::analysis::{analyze_faucet_data, AnalysisResult};

use crate::advisor::{AdviceRequester, AdviceState};
use crate::generator::TextGenerator;

/// What the analyze screen displays after a run.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Charts are available; advice may still have failed.
    Ready {
        result: Box<AnalysisResult>,
        advice: AdviceState,
    },
    /// Loading or reporting failed. Only the message is shown.
    Failed { message: String },
}

impl AnalysisOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, AnalysisOutcome::Ready { .. })
    }
}

/// Runs the analysis against a fixed data path.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    data_path: PathBuf,
}

impl AnalysisSession {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Load, aggregate, report, then request faucet advice.
    ///
    /// Pipeline errors produce [`AnalysisOutcome::Failed`] and skip the
    /// advice request. An advice error keeps the charts.
    pub fn run<G: TextGenerator>(&self, advisor: &AdviceRequester<G>) -> AnalysisOutcome {
        let result = match analyze_faucet_data(&self.data_path) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(path = %self.data_path.display(), error = %e, "analysis failed");
                return AnalysisOutcome::Failed {
                    message: e.user_message(),
                };
            }
        };

        let advice = AdviceState::from_result(advisor.faucet_advice(&result.report.summary));
        AnalysisOutcome::Ready {
            result: Box::new(result),
            advice,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
