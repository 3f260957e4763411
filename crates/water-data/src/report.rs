//! Summary facts and chart descriptors derived from an aggregation.
//!
//! Everything here is pure: the descriptors carry the numbers and labels a
//! rendering backend needs, and `water-ui` draws them on the terminal.

use std::fmt::Write as _;

use serde::Serialize;
use water_core::error::{DashboardError, Result};
use water_core::formatting::{format_liters, format_number, percent_label, percentage};
use water_core::models::SummaryFacts;

use crate::aggregator::UsageAggregation;

/// Headroom applied above the largest hourly value on the line chart.
pub const Y_AXIS_HEADROOM: f64 = 1.2;

// ── Chart descriptors ─────────────────────────────────────────────────────────

/// One slice of the per-faucet pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the whole, 0–100.
    pub percent: f64,
    /// Share formatted with one decimal, e.g. `"80.0%"`.
    pub percent_label: String,
}

/// Total usage per faucet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One point of the hourly trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
}

/// Usage per hour of day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Points in bucket order (by 24-hour key).
    pub points: Vec<LinePoint>,
    /// Upper bound of the y axis: `1.2 ×` the largest point.
    pub y_max: f64,
}

/// Everything the analysis screen shows for one data file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageReport {
    pub summary: SummaryFacts,
    pub pie: PieChart,
    pub line: LineChart,
}

// ── build_report ──────────────────────────────────────────────────────────────

/// Derive summary facts and both chart descriptors.
///
/// Ties for most-used faucet or peak hour go to the first key in the
/// aggregation's order (lowest faucet id, earliest hour).
///
/// # Errors
///
/// [`DashboardError::EmptyData`] when there are no faucets or no hours.
pub fn build_report(aggregation: &UsageAggregation) -> Result<UsageReport> {
    let busiest = first_max_by(&aggregation.faucet_totals, |f| f.usage_liters)
        .ok_or_else(|| DashboardError::EmptyData("no faucet totals".to_string()))?;
    let peak = first_max_by(&aggregation.hourly, |b| b.usage_liters)
        .ok_or_else(|| DashboardError::EmptyData("no hourly usage".to_string()))?;

    let total = aggregation.total_usage();

    let summary = SummaryFacts {
        most_used_faucet: busiest.faucet_id.clone(),
        peak_hour: peak.label.clone(),
        total_usage_liters: total,
        peak_usage_liters: peak.usage_liters,
    };

    let pie = PieChart {
        title: "Water Usage by Faucet".to_string(),
        slices: aggregation
            .faucet_totals
            .iter()
            .map(|f| PieSlice {
                label: f.faucet_id.clone(),
                value: f.usage_liters,
                percent: percentage(f.usage_liters, total),
                percent_label: percent_label(f.usage_liters, total),
            })
            .collect(),
    };

    let line = LineChart {
        title: "Hourly Water Usage Trend".to_string(),
        x_label: "Time of Day (12-hour clock)".to_string(),
        y_label: "Water Usage (liters)".to_string(),
        points: aggregation
            .hourly
            .iter()
            .map(|b| LinePoint {
                label: b.label.clone(),
                value: b.usage_liters,
            })
            .collect(),
        y_max: peak.usage_liters * Y_AXIS_HEADROOM,
    };

    Ok(UsageReport { summary, pie, line })
}

/// First element holding the maximum key; later equal keys do not replace it.
fn first_max_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    let mut best: Option<(&T, f64)> = None;
    for item in items {
        let value = key(item);
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((item, value)),
        }
    }
    best.map(|(item, _)| item)
}

// ── Text rendering ────────────────────────────────────────────────────────────

impl UsageReport {
    /// Plain-text rendition used by the non-interactive report mode.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let s = &self.summary;

        let _ = writeln!(out, "Water Usage Report");
        let _ = writeln!(out, "{}", "=".repeat(40));
        let _ = writeln!(out, "- Most Frequently Used Faucet: {}", s.most_used_faucet);
        let _ = writeln!(out, "- Peak Water Usage Hour: {}", s.peak_hour);
        let _ = writeln!(out, "- Total Water Usage: {}", format_liters(s.total_usage_liters));
        let _ = writeln!(out, "- Peak Hour Usage: {}", format_liters(s.peak_usage_liters));

        let _ = writeln!(out);
        let _ = writeln!(out, "Total Water Usage by Faucet");
        for slice in &self.pie.slices {
            let _ = writeln!(
                out,
                "  {:<16} {:>14} {:>7}",
                slice.label,
                format_liters(slice.value),
                slice.percent_label
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.line.title);
        for point in &self.line.points {
            let _ = writeln!(
                out,
                "  {:<16} {:>14}",
                point.label,
                format_number(point.value, 2)
            );
        }

        out
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::UsageAggregator;
    use chrono::NaiveDateTime;
    use water_core::models::UsageRecord;

    fn make_record(faucet: &str, ts: &str, liters: f64) -> UsageRecord {
        let timestamp = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
        UsageRecord::new(faucet, timestamp, liters)
    }

    fn example_report() -> UsageReport {
        let records = vec![
            make_record("A", "2024-01-15 08:00:00", 3.0),
            make_record("B", "2024-01-15 08:30:00", 2.0),
            make_record("A", "2024-01-15 09:00:00", 5.0),
        ];
        build_report(&UsageAggregator::aggregate(&records)).unwrap()
    }

    #[test]
    fn test_summary_example() {
        let report = example_report();
        assert_eq!(report.summary.most_used_faucet, "A");
        // 8 AM and 9 AM tie at 5 L; the earlier hour wins.
        assert_eq!(report.summary.peak_hour, "8 AM");
        assert!((report.summary.total_usage_liters - 10.0).abs() < 1e-9);
        assert!((report.summary.peak_usage_liters - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_aggregation_is_empty_data_error() {
        let err = build_report(&UsageAggregation::default()).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyData(_)));
    }

    #[test]
    fn test_pie_slices_and_labels() {
        let report = example_report();
        assert_eq!(report.pie.title, "Water Usage by Faucet");
        assert_eq!(report.pie.slices.len(), 2);
        assert_eq!(report.pie.slices[0].label, "A");
        assert_eq!(report.pie.slices[0].percent_label, "80.0%");
        assert_eq!(report.pie.slices[1].percent_label, "20.0%");
        let sum: f64 = report.pie.slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_chart_axis() {
        let report = example_report();
        assert_eq!(report.line.points.len(), 2);
        assert_eq!(report.line.points[0].label, "8 AM");
        assert!((report.line.y_max - 6.0).abs() < 1e-9);
        assert_eq!(report.line.x_label, "Time of Day (12-hour clock)");
        assert_eq!(report.line.y_label, "Water Usage (liters)");
    }

    #[test]
    fn test_argmax_picks_strict_maximum() {
        let records = vec![
            make_record("bath", "2024-01-15 07:00:00", 10.0),
            make_record("garden", "2024-01-15 19:00:00", 55.0),
            make_record("kitchen", "2024-01-15 19:30:00", 4.0),
        ];
        let report = build_report(&UsageAggregator::aggregate(&records)).unwrap();
        assert_eq!(report.summary.most_used_faucet, "garden");
        assert_eq!(report.summary.peak_hour, "7 PM");
        assert!((report.summary.peak_usage_liters - 59.0).abs() < 1e-9);
    }

    #[test]
    fn test_faucet_tie_goes_to_lowest_id() {
        let records = vec![
            make_record("Z", "2024-01-15 07:00:00", 4.0),
            make_record("M", "2024-01-15 08:00:00", 4.0),
        ];
        let report = build_report(&UsageAggregator::aggregate(&records)).unwrap();
        assert_eq!(report.summary.most_used_faucet, "M");
    }

    #[test]
    fn test_render_text_contains_summary_and_rows() {
        let text = example_report().render_text();
        assert!(text.contains("Most Frequently Used Faucet: A"));
        assert!(text.contains("Peak Water Usage Hour: 8 AM"));
        assert!(text.contains("10.00 L"));
        assert!(text.contains("80.0%"));
        assert!(text.contains("9 AM"));
    }
}
