//! Household water usage calculator.
//!
//! Converts daily and weekly habits into an estimated daily and monthly
//! consumption in US gallons using fixed per-unit rates.

use serde::{Deserialize, Serialize};

/// Gallons per minute of showering.
pub const SHOWER_GALLONS_PER_MINUTE: f64 = 2.1;
/// Gallons per dishwashing load.
pub const DISHWASHING_GALLONS_PER_LOAD: f64 = 6.0;
/// Gallons per laundry load.
pub const LAUNDRY_GALLONS_PER_LOAD: f64 = 15.0;
/// Gallons per minute of garden watering.
pub const WATERING_GALLONS_PER_MINUTE: f64 = 3.0;

/// Days used to turn a daily estimate into a monthly one.
pub const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_WEEK: f64 = 7.0;

/// Habits entered on the calculator screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub shower_minutes_per_day: u32,
    pub dishwashing_loads_per_week: u32,
    pub laundry_loads_per_week: u32,
    pub watering_minutes_per_day: u32,
}

/// Estimated consumption in gallons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub daily_gallons: f64,
    pub monthly_gallons: f64,
}

/// Stateless usage estimator.
pub struct UsageCalculator;

impl UsageCalculator {
    /// Estimate daily and monthly consumption.
    ///
    /// Weekly loads are spread evenly over seven days; a month is thirty days.
    ///
    /// # Examples
    ///
    /// ```
    /// use water_core::calculator::{CalculatorInputs, UsageCalculator};
    ///
    /// let result = UsageCalculator::estimate(&CalculatorInputs {
    ///     shower_minutes_per_day: 10,
    ///     dishwashing_loads_per_week: 7,
    ///     laundry_loads_per_week: 7,
    ///     watering_minutes_per_day: 5,
    /// });
    /// assert!((result.daily_gallons - 57.0).abs() < 1e-9);
    /// ```
    pub fn estimate(inputs: &CalculatorInputs) -> CalculatorResult {
        let daily_gallons = f64::from(inputs.shower_minutes_per_day) * SHOWER_GALLONS_PER_MINUTE
            + f64::from(inputs.dishwashing_loads_per_week) * DISHWASHING_GALLONS_PER_LOAD
                / DAYS_PER_WEEK
            + f64::from(inputs.laundry_loads_per_week) * LAUNDRY_GALLONS_PER_LOAD / DAYS_PER_WEEK
            + f64::from(inputs.watering_minutes_per_day) * WATERING_GALLONS_PER_MINUTE;

        CalculatorResult {
            daily_gallons,
            monthly_gallons: daily_gallons * DAYS_PER_MONTH,
        }
    }
}

impl CalculatorResult {
    /// Display lines shown under the calculator form.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("Daily Water Usage: {:.2} gallons", self.daily_gallons),
            format!("Monthly Water Usage: {:.2} gallons", self.monthly_gallons),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_reference_household() {
        let result = UsageCalculator::estimate(&CalculatorInputs {
            shower_minutes_per_day: 10,
            dishwashing_loads_per_week: 7,
            laundry_loads_per_week: 7,
            watering_minutes_per_day: 5,
        });
        assert_eq!(format!("{:.2}", result.daily_gallons), "57.00");
        assert_eq!(format!("{:.2}", result.monthly_gallons), "1710.00");
    }

    #[test]
    fn test_estimate_all_zero() {
        let result = UsageCalculator::estimate(&CalculatorInputs::default());
        assert_eq!(result.daily_gallons, 0.0);
        assert_eq!(result.monthly_gallons, 0.0);
    }

    #[test]
    fn test_weekly_loads_are_spread_over_days() {
        let result = UsageCalculator::estimate(&CalculatorInputs {
            laundry_loads_per_week: 1,
            ..Default::default()
        });
        assert!((result.daily_gallons - 15.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_shower_only() {
        let result = UsageCalculator::estimate(&CalculatorInputs {
            shower_minutes_per_day: 8,
            ..Default::default()
        });
        assert!((result.daily_gallons - 16.8).abs() < 1e-9);
        assert!((result.monthly_gallons - 504.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_lines_two_decimals() {
        let result = UsageCalculator::estimate(&CalculatorInputs {
            shower_minutes_per_day: 10,
            dishwashing_loads_per_week: 7,
            laundry_loads_per_week: 7,
            watering_minutes_per_day: 5,
        });
        let lines = result.summary_lines();
        assert_eq!(lines[0], "Daily Water Usage: 57.00 gallons");
        assert_eq!(lines[1], "Monthly Water Usage: 1710.00 gallons");
    }
}
