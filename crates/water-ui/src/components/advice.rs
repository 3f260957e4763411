use ratatui::text::{Line, Span};

use water_runtime::advisor::AdviceState;

use crate::themes::Theme;

/// Text shown while a generator call is in flight.
pub const REQUESTING: &str = "Requesting advice...";

/// Lines for an advice panel.
///
/// A ready answer gets `heading` in the success style followed by the text;
/// a failure shows only the error message.
pub fn advice_lines<'a>(
    heading: &'a str,
    advice: Option<&AdviceState>,
    pending: bool,
    theme: &'a Theme,
) -> Vec<Line<'a>> {
    if pending {
        return vec![Line::from(Span::styled(REQUESTING, theme.info))];
    }
    match advice {
        None => Vec::new(),
        Some(AdviceState::Ready(text)) => {
            let mut lines = vec![Line::from(Span::styled(heading, theme.success))];
            lines.extend(
                text.lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), theme.text))),
            );
            lines
        }
        Some(AdviceState::Failed(message)) => {
            vec![Line::from(Span::styled(message.clone(), theme.error))]
        }
    }
}
