//! Keyboard-driven form fields: single select, multi select, non-negative
//! integer input and a submit button.
//!
//! | Key               | Effect                                     |
//! |-------------------|--------------------------------------------|
//! | Up / Down / Tab   | move focus between fields                  |
//! | Left / Right      | change option, move cursor, or ∓1          |
//! | Space             | toggle the option under the cursor         |
//! | 0–9 / Backspace   | edit a number field                        |
//! | Enter             | press the button (otherwise next field)    |

use crossterm::event::KeyCode;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use water_core::questionnaire::Choice;

use crate::themes::Theme;

/// Result of feeding a key to a [`Form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
}

// ── SelectField ───────────────────────────────────────────────────────────────

/// Pick exactly one option.
#[derive(Debug, Clone)]
pub struct SelectField {
    pub label: &'static str,
    options: Vec<&'static str>,
    selected: usize,
}

impl SelectField {
    pub fn new(label: &'static str, options: Vec<&'static str>) -> Self {
        Self {
            label,
            options,
            selected: 0,
        }
    }

    /// Field listing every choice of `T` in display order.
    pub fn for_choice<T: Choice>(label: &'static str) -> Self {
        Self::new(label, T::labels())
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Selected option as a typed choice.
    pub fn value<T: Choice>(&self) -> T {
        T::from_index(self.selected)
    }

    pub fn next(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

// ── MultiSelectField ──────────────────────────────────────────────────────────

/// Pick any number of options, including none.
#[derive(Debug, Clone)]
pub struct MultiSelectField {
    pub label: &'static str,
    options: Vec<&'static str>,
    checked: Vec<bool>,
    cursor: usize,
}

impl MultiSelectField {
    pub fn new(label: &'static str, options: Vec<&'static str>) -> Self {
        let checked = vec![false; options.len()];
        Self {
            label,
            options,
            checked,
            cursor: 0,
        }
    }

    pub fn for_choice<T: Choice>(label: &'static str) -> Self {
        Self::new(label, T::labels())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Flip the option under the cursor.
    pub fn toggle(&mut self) {
        if let Some(flag) = self.checked.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }

    /// Indices of checked options, in display order.
    pub fn checked_indices(&self) -> Vec<usize> {
        self.checked
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.then_some(i))
            .collect()
    }

    /// Checked options as typed choices, in display order.
    pub fn values<T: Choice>(&self) -> Vec<T> {
        self.checked_indices()
            .into_iter()
            .map(T::from_index)
            .collect()
    }
}

// ── NumberField ───────────────────────────────────────────────────────────────

/// Non-negative whole number typed digit by digit.
#[derive(Debug, Clone)]
pub struct NumberField {
    pub label: &'static str,
    value: u32,
}

impl NumberField {
    pub fn new(label: &'static str) -> Self {
        Self { label, value: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Append a decimal digit. Digits that would overflow are ignored.
    pub fn push_digit(&mut self, digit: u32) {
        if digit > 9 {
            return;
        }
        if let Some(v) = self
            .value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
        {
            self.value = v;
        }
    }

    pub fn backspace(&mut self) {
        self.value /= 10;
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Never goes below zero.
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}

// ── Form ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Field {
    Select(SelectField),
    MultiSelect(MultiSelectField),
    Number(NumberField),
    Button(&'static str),
}

/// An ordered list of fields with a single focus.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    focus: usize,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Whether the focused field consumes digit keys.
    pub fn wants_digits(&self) -> bool {
        matches!(self.fields.get(self.focus), Some(Field::Number(_)))
    }

    pub fn select(&self, index: usize) -> Option<&SelectField> {
        match self.fields.get(index) {
            Some(Field::Select(f)) => Some(f),
            _ => None,
        }
    }

    pub fn multi_select(&self, index: usize) -> Option<&MultiSelectField> {
        match self.fields.get(index) {
            Some(Field::MultiSelect(f)) => Some(f),
            _ => None,
        }
    }

    pub fn number(&self, index: usize) -> Option<&NumberField> {
        match self.fields.get(index) {
            Some(Field::Number(f)) => Some(f),
            _ => None,
        }
    }

    /// Apply one key press to the focused field.
    pub fn handle_key(&mut self, code: KeyCode) -> FormAction {
        match code {
            KeyCode::Up | KeyCode::BackTab => self.focus_prev(),
            KeyCode::Down | KeyCode::Tab => self.focus_next(),
            KeyCode::Enter => {
                if matches!(self.fields.get(self.focus), Some(Field::Button(_))) {
                    return FormAction::Submit;
                }
                self.focus_next();
            }
            other => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    edit_field(field, other);
                }
            }
        }
        FormAction::None
    }

    /// Render every field, highlighting the focused one.
    pub fn to_lines<'a>(&self, theme: &'a Theme) -> Vec<Line<'a>> {
        let mut lines = Vec::with_capacity(self.fields.len() * 3);
        for (i, field) in self.fields.iter().enumerate() {
            let focused = i == self.focus;
            let marker = if focused { "▸ " } else { "  " };
            match field {
                Field::Select(f) => {
                    lines.push(label_line(marker, f.label, focused, theme));
                    let mut spans = vec![Span::raw("    ")];
                    for (j, option) in f.options.iter().enumerate() {
                        let (bullet, style) = if j == f.selected {
                            ("(•) ", theme.option_selected)
                        } else {
                            ("( ) ", theme.text)
                        };
                        spans.push(Span::styled(format!("{bullet}{option}  "), style));
                    }
                    lines.push(Line::from(spans));
                }
                Field::MultiSelect(f) => {
                    lines.push(label_line(marker, f.label, focused, theme));
                    let mut spans = vec![Span::raw("    ")];
                    for (j, option) in f.options.iter().enumerate() {
                        let (bullet, mut style) = if f.checked[j] {
                            ("[x] ", theme.option_selected)
                        } else {
                            ("[ ] ", theme.text)
                        };
                        if focused && j == f.cursor {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                        spans.push(Span::styled(format!("{bullet}{option}"), style));
                        spans.push(Span::raw("  "));
                    }
                    lines.push(Line::from(spans));
                }
                Field::Number(f) => {
                    lines.push(label_line(marker, f.label, focused, theme));
                    lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled("[ ", theme.dim),
                        Span::styled(f.value.to_string(), theme.value),
                        Span::styled(" ]", theme.dim),
                    ]));
                }
                Field::Button(text) => {
                    let style = if focused {
                        theme.focus.add_modifier(Modifier::REVERSED)
                    } else {
                        theme.bold
                    };
                    lines.push(Line::from(vec![
                        Span::raw(marker),
                        Span::styled(format!("< {text} >"), style),
                    ]));
                }
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

fn edit_field(field: &mut Field, code: KeyCode) {
    match (field, code) {
        (Field::Select(f), KeyCode::Right) => f.next(),
        (Field::Select(f), KeyCode::Left) => f.prev(),
        (Field::MultiSelect(f), KeyCode::Right) => f.next(),
        (Field::MultiSelect(f), KeyCode::Left) => f.prev(),
        (Field::MultiSelect(f), KeyCode::Char(' ')) => f.toggle(),
        (Field::Number(f), KeyCode::Right | KeyCode::Char('+')) => f.increment(),
        (Field::Number(f), KeyCode::Left | KeyCode::Char('-')) => f.decrement(),
        (Field::Number(f), KeyCode::Backspace) => f.backspace(),
        (Field::Number(f), KeyCode::Char(c)) => {
            if let Some(d) = c.to_digit(10) {
                f.push_digit(d);
            }
        }
        _ => {}
    }
}

fn label_line<'a>(marker: &'static str, label: &'static str, focused: bool, theme: &'a Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(marker, theme.focus),
        Span::styled(label, theme.field_style(focused)),
    ])
}

// ── Tests ─────────────────────────────────────────────────────────────────────
