//! Hourly usage trend drawn with ratatui's [`Chart`].

use ratatui::{
    layout::Rect,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use water_core::formatting::format_number;
use water_data::report::LineChart;

use crate::themes::Theme;

/// Most x-axis labels drawn before thinning kicks in.
pub const MAX_X_LABELS: usize = 8;

/// Points as `(bucket index, liters)`.
pub fn chart_points(chart: &LineChart) -> Vec<(f64, f64)> {
    chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect()
}

/// Upper x bound; at least 1 so a single bucket still has a visible axis.
pub fn x_upper(chart: &LineChart) -> f64 {
    (chart.points.len().saturating_sub(1) as f64).max(1.0)
}

/// Hour labels spread evenly along the x axis, always keeping the first and
/// last bucket.
pub fn x_axis_labels(chart: &LineChart, max_labels: usize) -> Vec<String> {
    let n = chart.points.len();
    if n <= max_labels || max_labels < 2 {
        return chart.points.iter().map(|p| p.label.clone()).collect();
    }
    (0..max_labels)
        .map(|k| {
            let idx = (k * (n - 1) + (max_labels - 1) / 2) / (max_labels - 1);
            chart.points[idx].label.clone()
        })
        .collect()
}

/// `0`, the midpoint and `y_max`, one decimal each.
pub fn y_axis_labels(y_max: f64) -> Vec<String> {
    [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|v| format_number(*v, 1))
        .collect()
}

/// Render the line chart into `area`.
pub fn render_line_chart(frame: &mut Frame, area: Rect, chart: &LineChart, theme: &Theme) {
    let data = chart_points(chart);
    let y_max = if chart.y_max > 0.0 { chart.y_max } else { 1.0 };

    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.chart_line)
            .data(&data),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(theme.chart_marker)
            .data(&data),
    ];

    let x_axis = Axis::default()
        .title(Span::styled(chart.x_label.clone(), theme.label))
        .style(theme.chart_axis)
        .bounds([0.0, x_upper(chart)])
        .labels(x_axis_labels(chart, MAX_X_LABELS));

    let y_axis = Axis::default()
        .title(Span::styled(chart.y_label.clone(), theme.label))
        .style(theme.chart_axis)
        .bounds([0.0, y_max])
        .labels(y_axis_labels(y_max));

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(Span::styled(format!(" {} ", chart.title), theme.header)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(widget, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
