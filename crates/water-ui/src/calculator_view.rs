//! Water usage calculator screen. The estimate updates on every key press.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use water_core::calculator::{CalculatorInputs, CalculatorResult, UsageCalculator};

use crate::components::form::{Field, Form, NumberField};
use crate::themes::Theme;

const SHOWER: usize = 0;
const DISHES: usize = 1;
const LAUNDRY: usize = 2;
const WATERING: usize = 3;

#[derive(Debug, Clone)]
pub struct CalculatorView {
    form: Form,
}

impl Default for CalculatorView {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorView {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::Number(NumberField::new("How many minutes do you shower daily?")),
                Field::Number(NumberField::new(
                    "How many loads of dishes do you wash per week?",
                )),
                Field::Number(NumberField::new(
                    "How many loads do you do laundry per week?",
                )),
                Field::Number(NumberField::new(
                    "How many minutes do you water the garden daily?",
                )),
            ]),
        }
    }

    pub fn inputs(&self) -> CalculatorInputs {
        let value = |i| self.form.number(i).map_or(0, NumberField::value);
        CalculatorInputs {
            shower_minutes_per_day: value(SHOWER),
            dishwashing_loads_per_week: value(DISHES),
            laundry_loads_per_week: value(LAUNDRY),
            watering_minutes_per_day: value(WATERING),
        }
    }

    pub fn result(&self) -> CalculatorResult {
        UsageCalculator::estimate(&self.inputs())
    }

    /// Every field is numeric, so digits always belong to the form.
    pub fn wants_digits(&self) -> bool {
        self.form.wants_digits()
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        self.form.handle_key(code);
    }
}

pub fn render_calculator_view(frame: &mut Frame, area: Rect, view: &CalculatorView, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled("Water Usage Calculator", theme.bold)),
        Line::from(""),
    ];
    lines.extend(view.form.to_lines(theme));
    for summary in view.result().summary_lines() {
        lines.push(Line::from(Span::styled(summary, theme.value)));
    }

    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border)
                    .title(" Water Usage Calculator "),
            ),
        area,
    );
}
