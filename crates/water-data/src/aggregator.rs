//! Per-faucet and per-hour usage aggregation.

use std::collections::BTreeMap;

use serde::Serialize;
use water_core::models::{FaucetTotal, HourBucket, UsageRecord};
use water_core::time_utils::hour_label;

// ── UsageAggregation ──────────────────────────────────────────────────────────

/// Both groupings of one record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageAggregation {
    /// One entry per faucet, ordered by faucet id.
    pub faucet_totals: Vec<FaucetTotal>,
    /// One entry per hour present in the data, ordered by 24-hour key.
    pub hourly: Vec<HourBucket>,
}

impl UsageAggregation {
    /// Sum of all faucet totals.
    pub fn total_usage(&self) -> f64 {
        self.faucet_totals.iter().map(|f| f.usage_liters).sum()
    }

    /// `true` when there was nothing to aggregate.
    pub fn is_empty(&self) -> bool {
        self.faucet_totals.is_empty() && self.hourly.is_empty()
    }
}

// ── UsageAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that groups usage records by faucet and by hour.
pub struct UsageAggregator;

impl UsageAggregator {
    /// Group `records` by faucet and by hour of day.
    ///
    /// Hours with no records are absent rather than zero-filled. Empty input
    /// yields an empty aggregation.
    pub fn aggregate(records: &[UsageRecord]) -> UsageAggregation {
        UsageAggregation {
            faucet_totals: Self::faucet_totals(records),
            hourly: Self::hourly_buckets(records),
        }
    }

    /// Sum usage per faucet, ordered by faucet id.
    pub fn faucet_totals(records: &[UsageRecord]) -> Vec<FaucetTotal> {
        let mut map: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for record in records {
            let slot = map.entry(record.faucet_id.as_str()).or_insert((0.0, 0));
            slot.0 += record.usage_liters;
            slot.1 += 1;
        }

        map.into_iter()
            .map(|(faucet_id, (usage_liters, record_count))| FaucetTotal {
                faucet_id: faucet_id.to_string(),
                usage_liters,
                record_count,
            })
            .collect()
    }

    /// Sum usage per hour of day, ordered by hour and labelled on the 12-hour
    /// clock.
    pub fn hourly_buckets(records: &[UsageRecord]) -> Vec<HourBucket> {
        let mut map: BTreeMap<u32, f64> = BTreeMap::new();
        for record in records {
            *map.entry(record.hour).or_insert(0.0) += record.usage_liters;
        }

        map.into_iter()
            .map(|(hour, usage_liters)| HourBucket {
                hour,
                label: hour_label(hour),
                usage_liters,
            })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_record(faucet: &str, ts: &str, liters: f64) -> UsageRecord {
        let timestamp = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
        UsageRecord::new(faucet, timestamp, liters)
    }

    fn sample() -> Vec<UsageRecord> {
        vec![
            make_record("A", "2024-01-15 08:00:00", 3.0),
            make_record("B", "2024-01-15 08:30:00", 2.0),
            make_record("A", "2024-01-15 09:00:00", 5.0),
        ]
    }

    #[test]
    fn test_faucet_totals_example() {
        let agg = UsageAggregator::aggregate(&sample());
        assert_eq!(agg.faucet_totals.len(), 2);
        assert_eq!(agg.faucet_totals[0].faucet_id, "A");
        assert!((agg.faucet_totals[0].usage_liters - 8.0).abs() < 1e-9);
        assert_eq!(agg.faucet_totals[0].record_count, 2);
        assert_eq!(agg.faucet_totals[1].faucet_id, "B");
        assert!((agg.faucet_totals[1].usage_liters - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_hourly_buckets_example() {
        let agg = UsageAggregator::aggregate(&sample());
        let labels: Vec<&str> = agg.hourly.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["8 AM", "9 AM"]);
        assert!((agg.hourly[0].usage_liters - 5.0).abs() < 1e-9);
        assert!((agg.hourly[1].usage_liters - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_gives_empty_mappings() {
        let agg = UsageAggregator::aggregate(&[]);
        assert!(agg.faucet_totals.is_empty());
        assert!(agg.hourly.is_empty());
        assert!(agg.is_empty());
        assert_eq!(agg.total_usage(), 0.0);
    }

    #[test]
    fn test_sums_agree_with_records() {
        let records = vec![
            make_record("kitchen", "2024-01-15 00:10:00", 1.5),
            make_record("bath", "2024-01-15 07:45:00", 12.25),
            make_record("garden", "2024-01-15 18:00:00", 40.0),
            make_record("kitchen", "2024-01-15 18:30:00", 2.75),
            make_record("bath", "2024-01-16 23:59:00", 9.0),
        ];
        let expected: f64 = records.iter().map(|r| r.usage_liters).sum();
        let agg = UsageAggregator::aggregate(&records);

        let faucet_sum: f64 = agg.faucet_totals.iter().map(|f| f.usage_liters).sum();
        let hourly_sum: f64 = agg.hourly.iter().map(|b| b.usage_liters).sum();
        assert!((faucet_sum - expected).abs() < 1e-9);
        assert!((hourly_sum - expected).abs() < 1e-9);
        assert!((agg.total_usage() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_hours_ordered_chronologically_not_by_label() {
        let records = vec![
            make_record("A", "2024-01-15 13:00:00", 1.0),
            make_record("A", "2024-01-15 00:00:00", 1.0),
            make_record("A", "2024-01-15 12:00:00", 1.0),
            make_record("A", "2024-01-15 01:00:00", 1.0),
        ];
        let agg = UsageAggregator::aggregate(&records);
        let labels: Vec<&str> = agg.hourly.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["12 AM", "1 AM", "12 PM", "1 PM"]);
    }

    #[test]
    fn test_absent_hours_are_not_zero_filled() {
        let agg = UsageAggregator::aggregate(&sample());
        assert_eq!(agg.hourly.len(), 2);
    }

    #[test]
    fn test_same_hour_on_different_days_shares_bucket() {
        let records = vec![
            make_record("A", "2024-01-15 08:00:00", 1.0),
            make_record("A", "2024-01-16 08:59:00", 2.0),
        ];
        let agg = UsageAggregator::aggregate(&records);
        assert_eq!(agg.hourly.len(), 1);
        assert!((agg.hourly[0].usage_liters - 3.0).abs() < 1e-9);
    }
}
