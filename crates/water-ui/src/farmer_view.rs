//! Farmer's questionnaire and its advice panel.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use water_core::questionnaire::{CropType, FarmAnswers, IrrigationMethod, SoilType};
use water_runtime::advisor::AdviceState;

use crate::components::advice::advice_lines;
use crate::components::form::{Field, Form, FormAction, SelectField};
use crate::themes::Theme;

const CROP: usize = 0;
const IRRIGATION: usize = 1;
const SOIL: usize = 2;

/// State of the farmer's screen.
#[derive(Debug, Clone)]
pub struct FarmerView {
    form: Form,
    pub advice: Option<AdviceState>,
    pub pending: bool,
}

impl Default for FarmerView {
    fn default() -> Self {
        Self::new()
    }
}

impl FarmerView {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::Select(SelectField::for_choice::<CropType>("Type of crop:")),
                Field::Select(SelectField::for_choice::<IrrigationMethod>(
                    "Irrigation method:",
                )),
                Field::Select(SelectField::for_choice::<SoilType>("Soil type:")),
                Field::Button("Get Water Usage Advice for Farming"),
            ]),
            advice: None,
            pending: false,
        }
    }

    /// Answers as currently entered; rainfall is always the preset value.
    pub fn answers(&self) -> FarmAnswers {
        let defaults = FarmAnswers::default();
        FarmAnswers {
            crop: self.form.select(CROP).map_or(defaults.crop, |f| f.value()),
            irrigation: self
                .form
                .select(IRRIGATION)
                .map_or(defaults.irrigation, |f| f.value()),
            soil: self.form.select(SOIL).map_or(defaults.soil, |f| f.value()),
            ..defaults
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

    pub fn set_advice(&mut self, advice: AdviceState) {
        self.pending = false;
        self.advice = Some(advice);
    }
}

pub fn render_farmer_view(frame: &mut Frame, area: Rect, view: &FarmerView, theme: &Theme) {
    let rainfall = view.answers().annual_rainfall_inches;
    let mut lines = vec![
        Line::from(Span::styled("Efficient Water Use on Your Farm", theme.bold)),
        Line::from(""),
    ];
    lines.extend(view.form.to_lines(theme));
    lines.push(Line::from(Span::styled(
        format!("Using a preset average annual rainfall value: {rainfall} inches."),
        theme.info,
    )));
    lines.push(Line::from(""));
    lines.extend(advice_lines(
        "Personalized Water-Saving Advice for Farmers",
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
                    .title(" Farmer's Water Usage "),
            ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use water_core::questionnaire::DEFAULT_ANNUAL_RAINFALL_INCHES;

    #[test]
    fn test_answers_reflect_selection() {
        let mut view = FarmerView::new();
        view.handle_key(KeyCode::Right);
        view.handle_key(KeyCode::Right); // Rice
        view.handle_key(KeyCode::Down);
        view.handle_key(KeyCode::Right); // Sprinkler
        view.handle_key(KeyCode::Down);
        for _ in 0..3 {
            view.handle_key(KeyCode::Right); // Silty
        }
        let answers = view.answers();
        assert_eq!(answers.crop, CropType::Rice);
        assert_eq!(answers.irrigation, IrrigationMethod::Sprinkler);
        assert_eq!(answers.soil, SoilType::Silty);
        assert_eq!(answers.annual_rainfall_inches, DEFAULT_ANNUAL_RAINFALL_INCHES);
    }

    #[test]
    fn test_submit_from_button() {
        let mut view = FarmerView::new();
        view.handle_key(KeyCode::Up);
        assert!(view.handle_key(KeyCode::Enter));
        assert!(view.pending);
    }

    #[test]
    fn test_render_farmer_view_shows_rainfall() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::dark();
        let view = FarmerView::new();
        terminal
            .draw(|frame| render_farmer_view(frame, frame.area(), &view, &theme))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("14.02 inches"));
    }
}
