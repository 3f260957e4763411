use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single faucet reading from the usage CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Identifier of the faucet the reading belongs to.
    pub faucet_id: String,
    /// Wall-clock time of the reading. No timezone is attached.
    pub timestamp: NaiveDateTime,
    /// Water drawn, in liters.
    pub usage_liters: f64,
    /// Hour of day (0–23) taken from `timestamp`.
    pub hour: u32,
}

impl UsageRecord {
    /// Build a record, deriving `hour` from the timestamp.
    pub fn new(faucet_id: impl Into<String>, timestamp: NaiveDateTime, usage_liters: f64) -> Self {
        Self {
            faucet_id: faucet_id.into(),
            hour: timestamp.hour(),
            timestamp,
            usage_liters,
        }
    }
}

/// Summed usage for one faucet across all of its records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaucetTotal {
    pub faucet_id: String,
    pub usage_liters: f64,
    /// Number of records that contributed to the total.
    pub record_count: usize,
}

/// Summed usage for one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBucket {
    /// 24-hour key (0–23).
    pub hour: u32,
    /// 12-hour display label, e.g. `"1 PM"`.
    pub label: String,
    pub usage_liters: f64,
}

/// Headline facts derived from one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFacts {
    /// Faucet with the largest total usage.
    pub most_used_faucet: String,
    /// 12-hour label of the hour with the largest usage.
    pub peak_hour: String,
    /// Sum of every faucet's total, in liters.
    pub total_usage_liters: f64,
    /// Usage recorded during the peak hour, in liters.
    pub peak_usage_liters: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_usage_record_derives_hour() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(13, 45, 0)
            .unwrap();
        let record = UsageRecord::new("kitchen", ts, 2.5);
        assert_eq!(record.hour, 13);
        assert_eq!(record.faucet_id, "kitchen");
        assert!((record.usage_liters - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_usage_record_midnight_is_hour_zero() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 5, 0)
            .unwrap();
        assert_eq!(UsageRecord::new("bath", ts, 1.0).hour, 0);
    }
}
