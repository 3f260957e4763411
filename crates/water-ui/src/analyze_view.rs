//! "Analyze Faucet Data" screen.
//!
//! Layout when the analysis succeeded:
//!
//! ```text
//! ┌ pie chart + legend ──┐┌ hourly line chart ─────────┐
//! └──────────────────────┘└────────────────────────────┘
//! ┌ summary bullets, advice, closing note ─────────────┐
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! A failed analysis shows only its error message.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use water_data::analysis::AnalysisResult;
use water_runtime::advisor::AdviceState;
use water_runtime::session::AnalysisOutcome;

use crate::components::advice::advice_lines;
use crate::components::line_chart::render_line_chart;
use crate::components::pie_chart::render_pie_chart;
use crate::themes::Theme;

/// Note printed under the advice.
pub const CLOSING_NOTE: &str = "The graph above shows the total water usage by hour. Pay attention \
to the peak usage times and adjust your water habits accordingly to save water.";

#[derive(Debug, Clone, Default)]
pub struct AnalyzeView {
    pub outcome: Option<AnalysisOutcome>,
    /// An analysis run is waiting to be executed.
    pub pending: bool,
}

impl AnalyzeView {
    /// Ask for a run unless one already produced an outcome.
    pub fn request_if_needed(&mut self) -> bool {
        if self.outcome.is_none() && !self.pending {
            self.pending = true;
        }
        self.pending
    }

    /// Ask for a fresh run regardless of earlier outcomes.
    pub fn request_refresh(&mut self) {
        self.pending = true;
    }

    pub fn set_outcome(&mut self, outcome: AnalysisOutcome) {
        self.pending = false;
        self.outcome = Some(outcome);
    }
}

/// Summary bullets, advice block and closing note.
pub fn summary_lines<'a>(
    result: &AnalysisResult,
    advice: &AdviceState,
    theme: &'a Theme,
) -> Vec<Line<'a>> {
    let summary = &result.report.summary;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("• Most Frequently Used Faucet: ", theme.label),
            Span::styled(summary.most_used_faucet.clone(), theme.value),
        ]),
        Line::from(vec![
            Span::styled("• Peak Water Usage Hour: ", theme.label),
            Span::styled(summary.peak_hour.clone(), theme.value),
        ]),
        Line::from(vec![
            Span::styled("• Readings per Faucet: ", theme.label),
            Span::styled(result.readings_per_faucet(), theme.value),
        ]),
        Line::from(Span::styled(result.overview(), theme.dim)),
        Line::from(""),
    ];
    lines.extend(advice_lines(
        "AI-Generated Water-Saving Advice",
        Some(advice),
        false,
        theme,
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(CLOSING_NOTE, theme.dim)));
    lines
}

pub fn render_analyze_view(frame: &mut Frame, area: Rect, view: &AnalyzeView, theme: &Theme) {
    if view.pending {
        render_message(frame, area, "Analyzing faucet data...", theme.info);
        return;
    }
    match &view.outcome {
        None => render_message(frame, area, "Press 'r' to analyze the data file.", theme.dim),
        Some(AnalysisOutcome::Failed { message }) => {
            render_message(frame, area, message, theme.error)
        }
        Some(AnalysisOutcome::Ready { result, advice }) => {
            let [charts, details] =
                Layout::vertical([Constraint::Percentage(60), Constraint::Min(6)]).areas(area);
            let [pie_area, line_area] =
                Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(charts);

            render_pie_chart(frame, pie_area, &result.report.pie, theme);
            render_line_chart(frame, line_area, &result.report.line, theme);

            frame.render_widget(
                Paragraph::new(Text::from(summary_lines(result, advice, theme)))
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(theme.border)
                            .title(" Summary "),
                    ),
                details,
            );
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: ratatui::style::Style) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Analyze Faucet Data "),
            ),
        area,
    );
}
