//! Per-faucet pie chart drawn on a braille [`Canvas`], with a legend that
//! carries the percentage labels.
//!
//! Slices start at 12 o'clock and run counter-clockwise in descriptor order.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    symbols::Marker,
    text::{Line, Span, Text},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use water_data::report::PieChart;

use crate::themes::Theme;

/// Angle (degrees, counter-clockwise from the positive x axis) where the
/// first slice begins.
pub const START_ANGLE_DEG: f64 = 90.0;

const LEGEND_SWATCH: &str = "■ ";

/// Cumulative upper bounds of each slice as fractions of the whole.
///
/// Returns an empty vector when the total is not positive.
pub fn slice_bounds(chart: &PieChart) -> Vec<f64> {
    let total: f64 = chart.slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut acc = 0.0;
    chart
        .slices
        .iter()
        .map(|s| {
            acc += s.value;
            acc / total
        })
        .collect()
}

/// Slice containing the direction `angle_deg`.
pub fn slice_at_angle(angle_deg: f64, bounds: &[f64]) -> Option<usize> {
    let last = bounds.len().checked_sub(1)?;
    let fraction = (angle_deg - START_ANGLE_DEG).rem_euclid(360.0) / 360.0;
    Some(bounds.iter().position(|b| fraction < *b).unwrap_or(last))
}

/// Sample the unit disc on a `resolution × resolution` grid and bucket every
/// sample into its slice. The outer vector is indexed like `chart.slices`.
pub fn slice_points(chart: &PieChart, resolution: usize) -> Vec<Vec<(f64, f64)>> {
    let mut points = vec![Vec::new(); chart.slices.len()];
    let bounds = slice_bounds(chart);
    if bounds.is_empty() || resolution == 0 {
        return points;
    }

    let step = 2.0 / resolution as f64;
    for i in 0..=resolution {
        let x = -1.0 + i as f64 * step;
        for j in 0..=resolution {
            let y = -1.0 + j as f64 * step;
            if x * x + y * y > 1.0 {
                continue;
            }
            let angle = y.atan2(x).to_degrees();
            if let Some(idx) = slice_at_angle(angle, &bounds) {
                points[idx].push((x, y));
            }
        }
    }
    points
}

/// Canvas bounds that keep the disc round given terminal cells roughly twice
/// as tall as they are wide.
fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let w = f64::from(area.width.max(1));
    let h = f64::from(area.height.max(1)) * 2.0;
    if w >= h {
        let half = w / h;
        ([-half, half], [-1.0, 1.0])
    } else {
        let half = h / w;
        ([-1.0, 1.0], [-half, half])
    }
}

/// Legend lines: a coloured swatch, the faucet id and its percentage.
pub fn legend_lines<'a>(chart: &PieChart, theme: &'a Theme) -> Vec<Line<'a>> {
    chart
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Line::from(vec![
                Span::styled(LEGEND_SWATCH, theme.text.fg(theme.slice_color(i))),
                Span::styled(slice.label.clone(), theme.text),
                Span::raw(" "),
                Span::styled(slice.percent_label.clone(), theme.value),
            ])
        })
        .collect()
}

fn legend_width(chart: &PieChart) -> u16 {
    let widest = chart
        .slices
        .iter()
        .map(|s| LEGEND_SWATCH.width() + s.label.width() + 1 + s.percent_label.width())
        .max()
        .unwrap_or(0);
    u16::try_from(widest + 2).unwrap_or(u16::MAX)
}

/// Render the pie chart with its legend into `area`.
pub fn render_pie_chart(frame: &mut Frame, area: Rect, chart: &PieChart, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(format!(" {} ", chart.title), theme.header));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [disc_area, legend_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(legend_width(chart))])
            .areas(inner);

    let resolution = usize::from(disc_area.width.max(disc_area.height * 2)).clamp(16, 160);
    let points = slice_points(chart, resolution);
    let (x_bounds, y_bounds) = canvas_bounds(disc_area);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (i, coords) in points.iter().enumerate() {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: theme.slice_color(i),
                });
            }
        });
    frame.render_widget(canvas, disc_area);

    frame.render_widget(
        Paragraph::new(Text::from(legend_lines(chart, theme))),
        legend_area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use water_data::report::PieSlice;

    fn chart(values: &[(&str, f64)]) -> PieChart {
        let total: f64 = values.iter().map(|(_, v)| v).sum();
        PieChart {
            title: "Water Usage by Faucet".to_string(),
            slices: values
                .iter()
                .map(|(label, v)| PieSlice {
                    label: label.to_string(),
                    value: *v,
                    percent: v / total * 100.0,
                    percent_label: format!("{:.1}%", v / total * 100.0),
                })
                .collect(),
        }
    }

    #[test]
    fn test_slice_bounds_cumulative() {
        let bounds = slice_bounds(&chart(&[("A", 8.0), ("B", 2.0)]));
        assert_eq!(bounds.len(), 2);
        assert!((bounds[0] - 0.8).abs() < 1e-9);
        assert!((bounds[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_slice_bounds_zero_total() {
        assert!(slice_bounds(&chart(&[("A", 0.0)])).is_empty());
    }

    #[test]
    fn test_first_slice_starts_at_top() {
        let bounds = slice_bounds(&chart(&[("A", 1.0), ("B", 1.0)]));
        // Just past 12 o'clock, counter-clockwise, is the first slice.
        assert_eq!(slice_at_angle(91.0, &bounds), Some(0));
        // 6 o'clock is where the first half ends.
        assert_eq!(slice_at_angle(271.0, &bounds), Some(1));
        assert_eq!(slice_at_angle(-89.0, &bounds), Some(1));
        assert_eq!(slice_at_angle(0.0, &bounds), Some(1));
        assert_eq!(slice_at_angle(180.0, &bounds), Some(0));
    }

    #[test]
    fn test_slice_points_proportional() {
        let points = slice_points(&chart(&[("A", 3.0), ("B", 1.0)]), 80);
        let a = points[0].len() as f64;
        let b = points[1].len() as f64;
        let share = a / (a + b);
        assert!((share - 0.75).abs() < 0.03, "share was {share}");
        assert!(points
            .iter()
            .flatten()
            .all(|(x, y)| x * x + y * y <= 1.0 + 1e-9));
    }

    #[test]
    fn test_legend_lines_show_percent_labels() {
        let theme = Theme::dark();
        let lines = legend_lines(&chart(&[("A", 8.0), ("B", 2.0)]), &theme);
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(texts, vec!["■ A 80.0%", "■ B 20.0%"]);
        assert_eq!(lines[0].spans[0].style.fg, Some(theme.slice_color(0)));
    }

    #[test]
    fn test_canvas_bounds_keep_aspect() {
        let (x, y) = canvas_bounds(Rect::new(0, 0, 40, 10));
        assert_eq!(y, [-1.0, 1.0]);
        assert!((x[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_pie_chart_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let theme = Theme::dark();
        let pie = chart(&[("kitchen", 4.5), ("bath", 12.0), ("garden", 30.0)]);
        terminal
            .draw(|frame| render_pie_chart(frame, frame.area(), &pie, &theme))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Water Usage by Faucet"));
        assert!(content.contains("garden"));
    }

    #[test]
    fn test_render_pie_chart_tiny_area_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        let theme = Theme::classic();
        let pie = chart(&[("A", 1.0)]);
        terminal
            .draw(|frame| render_pie_chart(frame, frame.area(), &pie, &theme))
            .unwrap();
    }
}
