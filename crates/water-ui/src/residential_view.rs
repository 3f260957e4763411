//! Residential questionnaire and its advice panel.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use water_core::questionnaire::{
    ActivityFrequency, HouseholdSize, Motivation, ResidentialAnswers, SavingPractice,
};
use water_runtime::advisor::AdviceState;

use crate::components::advice::advice_lines;
use crate::components::form::{Field, Form, FormAction, MultiSelectField, SelectField};
use crate::themes::Theme;

const HOUSEHOLD: usize = 0;
const ACTIVITIES: usize = 1;
const PRACTICES: usize = 2;
const MOTIVATION: usize = 3;

/// State of the residential advice screen.
#[derive(Debug, Clone)]
pub struct ResidentialView {
    form: Form,
    /// Last advice received, if any.
    pub advice: Option<AdviceState>,
    /// A request is waiting to be sent.
    pub pending: bool,
}

impl Default for ResidentialView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResidentialView {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::Select(SelectField::for_choice::<HouseholdSize>("Household size:")),
                Field::Select(SelectField::for_choice::<ActivityFrequency>(
                    "Water-intensive activities frequency:",
                )),
                Field::MultiSelect(MultiSelectField::for_choice::<SavingPractice>(
                    "Water-saving practices:",
                )),
                Field::Select(SelectField::for_choice::<Motivation>(
                    "Primary motivation for saving water:",
                )),
                Field::Button("Get Advice"),
            ]),
            advice: None,
            pending: false,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Answers as currently entered.
    pub fn answers(&self) -> ResidentialAnswers {
        let defaults = ResidentialAnswers::default();
        ResidentialAnswers {
            household_size: self
                .form
                .select(HOUSEHOLD)
                .map_or(defaults.household_size, |f| f.value()),
            activity_frequency: self
                .form
                .select(ACTIVITIES)
                .map_or(defaults.activity_frequency, |f| f.value()),
            practices: self
                .form
                .multi_select(PRACTICES)
                .map(|f| f.values())
                .unwrap_or_default(),
            motivation: self
                .form
                .select(MOTIVATION)
                .map_or(defaults.motivation, |f| f.value()),
        }
    }

    /// Feed a key. Returns `true` when the user asked for advice.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.form.handle_key(code) == FormAction::Submit {
            self.pending = true;
            return true;
        }
        false
    }

    /// Store the outcome of an advice request.
    pub fn set_advice(&mut self, advice: AdviceState) {
        self.pending = false;
        self.advice = Some(advice);
    }
}

pub fn render_residential_view(
    frame: &mut Frame,
    area: Rect,
    view: &ResidentialView,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Residential Water Usage Questionnaire",
            theme.bold,
        )),
        Line::from(""),
    ];
    lines.extend(view.form.to_lines(theme));
    lines.extend(advice_lines(
        "Personalized Advice:",
        view.advice.as_ref(),
        view.pending,
        theme,
    ));

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border)
                    .title(" Residential Advice "),
            ),
        area,
    );
}
