//! Main application state and TUI event loop for the water dashboard.
//!
//! [`App`] owns the theme, the current [`Screen`], every screen's form state
//! and the collaborators that talk to the outside world (the analysis session
//! and the advice requester).

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use water_runtime::advisor::{AdviceRequester, AdviceState};
use water_runtime::generator::TextGenerator;
use water_runtime::navigation::{transition, NavEvent, Screen};
use water_runtime::session::AnalysisSession;

use crate::analyze_view::{render_analyze_view, AnalyzeView};
use crate::calculator_view::{render_calculator_view, CalculatorView};
use crate::components::header::Header;
use crate::farmer_view::{render_farmer_view, FarmerView};
use crate::home_view::{render_home_view, HomeView};
use crate::residential_view::{render_residential_view, ResidentialView};
use crate::themes::Theme;

const SIDEBAR_WIDTH: u16 = 30;
const HEADER_HEIGHT: u16 = 4;

/// Leave raw mode and the alternate screen.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the dashboard TUI.
pub struct App<G = Box<dyn TextGenerator>> {
    /// Active colour theme.
    pub theme: Theme,
    /// Screen being shown.
    pub screen: Screen,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    pub home: HomeView,
    pub residential: ResidentialView,
    pub analyze: AnalyzeView,
    pub farmer: FarmerView,
    pub calculator: CalculatorView,
    session: AnalysisSession,
    advisor: AdviceRequester<G>,
    data_file_label: String,
}

impl<G: TextGenerator> App<G> {
    /// Construct the application showing `screen` first.
    pub fn new(
        theme_name: &str,
        screen: Screen,
        session: AnalysisSession,
        advisor: AdviceRequester<G>,
    ) -> Self {
        let data_file_label = session.data_path().display().to_string();
        let mut app = Self {
            theme: Theme::from_name(theme_name),
            screen: Screen::Home,
            should_quit: false,
            home: HomeView::new(),
            residential: ResidentialView::new(),
            analyze: AnalyzeView::default(),
            farmer: FarmerView::new(),
            calculator: CalculatorView::new(),
            session,
            advisor,
            data_file_label,
        };
        app.navigate(NavEvent::Select(screen));
        app
    }

    // ── Public event loop ────────────────────────────────────────────────────

    /// Run the interactive TUI until the user quits.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout. Generator and
    /// analysis calls run synchronously between frames, after a frame showing
    /// their pending state has been drawn.
    ///
    /// The loop exits on `q`, `Q`, or `Ctrl+C`.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal state unconditionally.
        restore_terminal()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.has_pending() {
                self.process_pending();
                continue;
            }

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                return Ok(());
            }

            // Give the caller's signal handling a chance to run.
            tokio::task::yield_now().await;
        }
    }

    // ── State transitions ────────────────────────────────────────────────────

    /// Apply a navigation event. Entering the analysis screen for the first
    /// time schedules a run.
    pub fn navigate(&mut self, event: NavEvent) {
        let next = transition(self.screen, event);
        if next != self.screen {
            tracing::debug!(from = ?self.screen, to = ?next, "screen change");
        }
        self.screen = next;
        if self.screen == Screen::AnalyzeFaucetData {
            self.analyze.request_if_needed();
        }
    }

    /// Route one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Esc => self.navigate(NavEvent::BackToHome),
            KeyCode::F(n) if (1..=5).contains(&n) => {
                self.navigate(NavEvent::Select(Screen::ALL[usize::from(n - 1)]));
            }
            KeyCode::Char(c @ '1'..='5') if !self.digits_captured() => {
                let idx = c as usize - '1' as usize;
                self.navigate(NavEvent::Select(Screen::ALL[idx]));
            }
            code => self.dispatch_to_screen(code),
        }
    }

    /// Whether any generator or analysis call is waiting.
    pub fn has_pending(&self) -> bool {
        self.analyze.pending || self.residential.pending || self.farmer.pending
    }

    /// Execute every waiting call, blocking until each returns.
    pub fn process_pending(&mut self) {
        if self.analyze.pending {
            let outcome = self.session.run(&self.advisor);
            self.analyze.set_outcome(outcome);
        }
        if self.residential.pending {
            let answers = self.residential.answers();
            let advice = AdviceState::from_result(self.advisor.residential_advice(&answers));
            self.residential.set_advice(advice);
        }
        if self.farmer.pending {
            let answers = self.farmer.answers();
            let advice = AdviceState::from_result(self.advisor.farm_advice(&answers));
            self.farmer.set_advice(advice);
        }
    }

    fn digits_captured(&self) -> bool {
        self.screen == Screen::WaterUsageCalculator && self.calculator.wants_digits()
    }

    fn dispatch_to_screen(&mut self, code: KeyCode) {
        match self.screen {
            Screen::Home => {
                if let Some(event) = self.home.handle_key(code) {
                    self.navigate(event);
                }
            }
            Screen::ResidentialAdvice => {
                self.residential.handle_key(code);
            }
            Screen::AnalyzeFaucetData => {
                if matches!(code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.analyze.request_refresh();
                }
            }
            Screen::FarmerWaterUsage => {
                self.farmer.handle_key(code);
            }
            Screen::WaterUsageCalculator => self.calculator.handle_key(code),
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let [header_area, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .areas(body);

        let header = Header::new(self.screen.title(), &self.data_file_label, &self.theme);
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), header_area);

        self.render_sidebar(frame, sidebar);

        match self.screen {
            Screen::Home => render_home_view(frame, content, &self.home, &self.theme),
            Screen::ResidentialAdvice => {
                render_residential_view(frame, content, &self.residential, &self.theme)
            }
            Screen::AnalyzeFaucetData => {
                render_analyze_view(frame, content, &self.analyze, &self.theme)
            }
            Screen::FarmerWaterUsage => {
                render_farmer_view(frame, content, &self.farmer, &self.theme)
            }
            Screen::WaterUsageCalculator => {
                render_calculator_view(frame, content, &self.calculator, &self.theme)
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(self.help_text(), self.theme.dim))),
            footer,
        );
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled("Choose a section", self.theme.label)),
            Line::from(""),
        ];
        for (i, screen) in Screen::ALL.iter().enumerate() {
            let style = if *screen == self.screen {
                self.theme.sidebar_selected
            } else {
                self.theme.sidebar_item
            };
            lines.push(Line::from(Span::styled(
                format!(" {} {} ", i + 1, screen.title()),
                style,
            )));
        }

        frame.render_widget(
            Paragraph::new(Text::from(lines)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border)
                    .title(" Navigation "),
            ),
            area,
        );
    }

    fn help_text(&self) -> String {
        let switch = if self.digits_captured() {
            "F1-F5 switch"
        } else {
            "1-5 switch"
        };
        let extra = match self.screen {
            Screen::AnalyzeFaucetData => " · r re-run",
            Screen::WaterUsageCalculator => " · 0-9 type · ←→ ∓1",
            _ => " · ←→ choose · Space toggle · Enter submit",
        };
        format!(" {switch} · ↑↓ move{extra} · Esc home · q quit")
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
