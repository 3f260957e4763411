//! Home screen: welcome text and the role question.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use water_core::questionnaire::{Choice, UserRole};
use water_runtime::navigation::NavEvent;

use crate::components::form::{Field, Form, FormAction, SelectField};
use crate::themes::Theme;

const ROLE_FIELD: usize = 0;

/// State of the home screen.
#[derive(Debug, Clone)]
pub struct HomeView {
    form: Form,
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::Select(SelectField::for_choice::<UserRole>("Please select your role:")),
                Field::Button("Submit"),
            ]),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Currently highlighted role.
    pub fn role(&self) -> UserRole {
        self.form
            .select(ROLE_FIELD)
            .map(|f| f.value::<UserRole>())
            .unwrap_or(UserRole::ALL[0])
    }

    /// Feed a key; pressing Submit yields a role navigation event.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<NavEvent> {
        match self.form.handle_key(code) {
            FormAction::Submit => Some(NavEvent::SubmitRole(self.role())),
            FormAction::None => None,
        }
    }
}

pub fn render_home_view(frame: &mut Frame, area: Rect, view: &HomeView, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to the Water Usage Application!",
            theme.bold,
        )),
        Line::from(Span::styled(
            "This app is designed to help you manage and conserve water effectively.",
            theme.text,
        )),
        Line::from(""),
    ];
    lines.extend(view.form.to_lines(theme));

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border)
                    .title(" Home "),
            ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_default_role_is_everyday_user() {
        assert_eq!(HomeView::new().role(), UserRole::EverydayWaterUser);
    }

    #[test]
    fn test_submit_emits_selected_role() {
        let mut view = HomeView::new();
        assert_eq!(view.handle_key(KeyCode::Right), None);
        assert_eq!(view.handle_key(KeyCode::Down), None);
        assert_eq!(
            view.handle_key(KeyCode::Enter),
            Some(NavEvent::SubmitRole(UserRole::AgriculturalProducer))
        );
    }

    #[test]
    fn test_render_home_view_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let theme = Theme::dark();
        let view = HomeView::new();
        terminal
            .draw(|frame| render_home_view(frame, frame.area(), &view, &theme))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Everyday Water User"));
    }
}
