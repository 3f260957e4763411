//! CSV loading for faucet usage logs.
//!
//! Reads a delimited file with at least the `faucet_id`, `timestamp` and
//! `usage_liters` columns into [`UsageRecord`]s, in file order.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;
use water_core::error::{DashboardError, Result};
use water_core::models::UsageRecord;
use water_core::time_utils::parse_naive_timestamp;

/// Columns every usage file must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["faucet_id", "timestamp", "usage_liters"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every usage record from the CSV at `path`.
///
/// # Errors
///
/// * [`DashboardError::NotFound`] when `path` does not exist.
/// * [`DashboardError::FileRead`] when the file exists but cannot be opened.
/// * [`DashboardError::Parse`] when a required column is missing, or a row has
///   an unparsable timestamp or non-numeric usage.
pub fn load_usage_records(path: &Path) -> Result<Vec<UsageRecord>> {
    if !path.exists() {
        return Err(DashboardError::NotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|source| DashboardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_usage_records(file)?;
    debug!(
        "Loaded {} usage records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse usage records from any CSV source.
pub fn read_usage_records<R: Read>(source: R) -> Result<Vec<UsageRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let headers = rdr
        .headers()
        .map_err(|e| DashboardError::Parse(format!("failed to read CSV headers: {e}")))?
        .clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let record = result
            .map_err(|e| DashboardError::Parse(format!("failed to read CSV row {row}: {e}")))?;
        records.push(columns.to_usage_record(&record, row)?);
    }

    Ok(records)
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Positions of the required columns within the header row.
struct ColumnIndex {
    faucet_id: usize,
    timestamp: usize,
    usage_liters: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DashboardError::Parse(format!("missing required column '{name}'")))
        };

        Ok(Self {
            faucet_id: position(REQUIRED_COLUMNS[0])?,
            timestamp: position(REQUIRED_COLUMNS[1])?,
            usage_liters: position(REQUIRED_COLUMNS[2])?,
        })
    }

    fn to_usage_record(&self, record: &StringRecord, row: usize) -> Result<UsageRecord> {
        let field = |idx: usize, name: &str| -> Result<&str> {
            record.get(idx).ok_or_else(|| {
                DashboardError::Parse(format!("row {row}: missing value for '{name}'"))
            })
        };

        let faucet_id = field(self.faucet_id, "faucet_id")?;

        let ts_str = field(self.timestamp, "timestamp")?;
        let timestamp = parse_naive_timestamp(ts_str).ok_or_else(|| {
            DashboardError::Parse(format!("row {row}: invalid timestamp '{ts_str}'"))
        })?;

        let usage_str = field(self.usage_liters, "usage_liters")?;
        let usage_liters: f64 = usage_str.parse().map_err(|e| {
            DashboardError::Parse(format!("row {row}: invalid usage_liters '{usage_str}': {e}"))
        })?;
        if !usage_liters.is_finite() {
            return Err(DashboardError::Parse(format!(
                "row {row}: usage_liters '{usage_str}' is not a finite number"
            )));
        }

        Ok(UsageRecord::new(faucet_id, timestamp, usage_liters))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
