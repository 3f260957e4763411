use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative wave string placed either side of the application title.
pub const WAVES: &str = "≈ ~ ≈ ~";

/// Dashboard header rendering four lines:
///
/// 1. Application title with wave decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. The current screen and data file in `[ screen | data file ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Title of the screen being shown.
    pub screen_title: &'a str,
    /// Data file the analysis screen reads.
    pub data_file: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(screen_title: &'a str, data_file: &'a str, theme: &'a Theme) -> Self {
        Self {
            screen_title,
            data_file,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            Line::from(vec![
                Span::styled(WAVES, self.theme.header_accent),
                Span::styled(" WATER USAGE APPLICATION ", self.theme.header),
                Span::styled(WAVES, self.theme.header_accent),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.screen_title, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.data_file, self.theme.dim),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
