use clap::Parser;
use std::path::{Path, PathBuf};

/// Name of the per-user directory holding logs and the default data file.
pub const APP_DIR_NAME: &str = ".water-dashboard";

/// File name looked up when no data file is given.
pub const DEFAULT_DATA_FILE_NAME: &str = "faucet_usage_data.csv";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Track and reduce household and farm water usage
#[derive(Parser, Debug, Clone)]
#[command(
    name = "water-dashboard",
    about = "Track and reduce household and farm water usage",
    version
)]
pub struct Settings {
    /// Faucet usage CSV (columns: faucet_id, timestamp, usage_liters)
    #[arg(long, env = "WATER_DASHBOARD_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Screen shown at startup
    #[arg(long, default_value = "home", value_parser = ["home", "residential", "analyze", "farmer", "calculator"])]
    pub screen: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Program that turns a JSON conversation on stdin into advice text on stdout
    #[arg(long, env = "WATER_DASHBOARD_ADVICE_COMMAND")]
    pub advice_command: Option<String>,

    /// Extra argument passed to the advice command (repeatable)
    #[arg(long = "advice-arg", allow_hyphen_values = true)]
    pub advice_args: Vec<String>,

    /// Print the faucet usage report to stdout instead of starting the dashboard
    #[arg(long)]
    pub report: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and resolve derived values.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from_args(args: Vec<std::ffi::OsString>) -> Self {
        Self::resolve(Settings::parse_from(args))
    }

    /// Apply the `--debug` override.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Log file to write to: the explicit `--log-file`, else the default
    /// under `~/.water-dashboard/logs/`.
    pub fn effective_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| Self::default_log_file_in(&home_dir()))
    }

    /// Default log file rooted at `base_dir` (used for testing).
    pub fn default_log_file_in(base_dir: &Path) -> PathBuf {
        base_dir
            .join(APP_DIR_NAME)
            .join("logs")
            .join("water-dashboard.log")
    }

    /// Candidate data files checked when `--data-file` is absent, in order.
    pub fn data_file_candidates(cwd: &Path, home: &Path) -> [PathBuf; 2] {
        [
            cwd.join(DEFAULT_DATA_FILE_NAME),
            home.join(APP_DIR_NAME).join(DEFAULT_DATA_FILE_NAME),
        ]
    }
}

/// Home directory, falling back to the current directory.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
