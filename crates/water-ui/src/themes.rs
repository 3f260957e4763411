use ratatui::style::{Color, Modifier, Style};

/// Background brightness reported by the terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Read the background from `COLORFGBG` (`"fg;bg"`). ANSI indices up to 6
/// count as dark, anything higher as light. Missing or garbled values fall
/// back to dark.
pub fn detect_background() -> BackgroundType {
    std::env::var("COLORFGBG")
        .map(|val| background_from_colorfgbg(&val))
        .unwrap_or(BackgroundType::Dark)
}

fn background_from_colorfgbg(val: &str) -> BackgroundType {
    match val.split(';').next_back().and_then(|bg| bg.parse::<u8>().ok()) {
        Some(bg) if bg <= 6 => BackgroundType::Dark,
        Some(_) => BackgroundType::Light,
        None => BackgroundType::Dark,
    }
}

/// Number of distinct pie slice colours before the palette repeats.
pub const PIE_PALETTE_LEN: usize = 8;

/// Every style used by the dashboard widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_accent: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Navigation and forms ─────────────────────────────────────────────────
    pub border: Style,
    pub sidebar_item: Style,
    pub sidebar_selected: Style,
    /// Field or button that has keyboard focus.
    pub focus: Style,
    /// Selected option inside a field.
    pub option_selected: Style,

    // ── Charts ───────────────────────────────────────────────────────────────
    pub chart_line: Style,
    pub chart_marker: Style,
    pub chart_axis: Style,
    pub pie_palette: [Color; PIE_PALETTE_LEN],
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Default palette for dark terminals.
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::LightBlue),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            border: Style::default().fg(Color::DarkGray),
            sidebar_item: Style::default().fg(Color::Gray),
            sidebar_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            focus: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            option_selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            chart_line: Style::default().fg(Color::LightBlue),
            chart_marker: Style::default().fg(Color::Cyan),
            chart_axis: Style::default().fg(Color::Gray),
            pie_palette: [
                Color::Blue,
                Color::Yellow,
                Color::Green,
                Color::Red,
                Color::Magenta,
                Color::Cyan,
                Color::LightRed,
                Color::LightGreen,
            ],
        }
    }

    /// Palette for light terminals.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Cyan),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            border: Style::default().fg(Color::Gray),
            sidebar_item: Style::default().fg(Color::DarkGray),
            sidebar_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            focus: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            option_selected: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            chart_line: Style::default().fg(Color::Blue),
            chart_marker: Style::default().fg(Color::Magenta),
            chart_axis: Style::default().fg(Color::DarkGray),
            pie_palette: [
                Color::Blue,
                Color::Red,
                Color::Green,
                Color::Magenta,
                Color::Cyan,
                Color::Yellow,
                Color::DarkGray,
                Color::LightBlue,
            ],
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette and
    /// no bold modifiers.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_accent: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            border: Style::default().fg(Color::DarkGray),
            sidebar_item: Style::default().fg(Color::White),
            sidebar_selected: Style::default().fg(Color::Black).bg(Color::White),
            focus: Style::default().fg(Color::Yellow),
            option_selected: Style::default().fg(Color::Cyan),

            chart_line: Style::default().fg(Color::Blue),
            chart_marker: Style::default().fg(Color::White),
            chart_axis: Style::default().fg(Color::White),
            pie_palette: [
                Color::Blue,
                Color::Yellow,
                Color::Green,
                Color::Red,
                Color::Magenta,
                Color::Cyan,
                Color::White,
                Color::Gray,
            ],
        }
    }

    /// Dark or light, following [`detect_background`].
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// `"dark"`, `"light"` or `"classic"`; anything else auto-detects.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Colour of the pie slice at `index`, cycling through the palette.
    pub fn slice_color(&self, index: usize) -> Color {
        self.pie_palette[index % PIE_PALETTE_LEN]
    }

    /// Style for a form row depending on whether it has focus.
    pub fn field_style(&self, focused: bool) -> Style {
        if focused {
            self.focus
        } else {
            self.label
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
