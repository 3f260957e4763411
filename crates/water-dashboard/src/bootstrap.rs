use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use water_core::settings::{Settings, APP_DIR_NAME};
use water_runtime::generator::{CommandGenerator, TextGenerator, UnconfiguredGenerator};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the `~/.water-dashboard/` directory hierarchy exists.
pub fn ensure_directories() -> anyhow::Result<PathBuf> {
    ensure_directories_in(&water_core::settings::home_dir())
}

/// Create `<home>/.water-dashboard/` and its `logs/` subdirectory, returning
/// the application directory.
pub fn ensure_directories_in(home: &Path) -> anyhow::Result<PathBuf> {
    let app_dir = home.join(APP_DIR_NAME);
    std::fs::create_dir_all(app_dir.join("logs"))?;
    Ok(app_dir)
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name to an [`EnvFilter`] directive.
pub fn level_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" | "WARN" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}

/// Initialise the global `tracing` subscriber, appending to `log_file`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout or
/// stderr. `RUST_LOG` overrides the level when set.
pub fn setup_logging(log_level: &str, log_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(log_level)));

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Resolve the CSV the analysis screen reads.
///
/// An explicit path always wins. Otherwise the first existing candidate of
/// [`Settings::data_file_candidates`] is used; if none exists the first
/// candidate is returned so the screen can report it as missing.
pub fn discover_data_path(explicit: Option<&Path>, cwd: &Path, home: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let [local, per_user] = Settings::data_file_candidates(cwd, home);
    if local.exists() {
        local
    } else if per_user.exists() {
        per_user
    } else {
        local
    }
}

// ── Generator wiring ───────────────────────────────────────────────────────────

/// Text generator configured by `--advice-command`, or a stand-in that
/// always fails.
pub fn build_generator(settings: &Settings) -> Box<dyn TextGenerator> {
    match settings.advice_command.as_deref() {
        Some(program) if !program.trim().is_empty() => {
            tracing::info!(program, "advice command configured");
            Box::new(CommandGenerator::new(program, settings.advice_args.clone()))
        }
        _ => {
            tracing::warn!("no advice command configured; advice requests will fail");
            Box::new(UnconfiguredGenerator)
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;
    use water_runtime::generator::ChatRequest;

    #[test]
    fn test_ensure_directories_in() {
        let tmp = TempDir::new().expect("tempdir");
        let app_dir = ensure_directories_in(tmp.path()).expect("create dirs");

        assert_eq!(app_dir, tmp.path().join(".water-dashboard"));
        assert!(app_dir.is_dir());
        assert!(app_dir.join("logs").is_dir(), "logs subdir must exist");

        // Idempotent.
        ensure_directories_in(tmp.path()).expect("second call");
    }

    #[test]
    fn test_level_directive_mapping() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("info"), "info");
        assert_eq!(level_directive("WARNING"), "warn");
        assert_eq!(level_directive("ERROR"), "error");
        assert_eq!(level_directive("CRITICAL"), "error");
        assert_eq!(level_directive("verbose"), "info");
    }

    #[test]
    fn test_discover_explicit_path_wins() {
        let tmp = TempDir::new().expect("tempdir");
        let explicit = tmp.path().join("elsewhere.csv");
        let found = discover_data_path(Some(&explicit), tmp.path(), tmp.path());
        assert_eq!(found, explicit);
    }

    #[test]
    fn test_discover_prefers_working_directory() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        let local = cwd.path().join("faucet_usage_data.csv");
        std::fs::write(&local, "faucet_id,timestamp,usage_liters\n").unwrap();
        let per_user_dir = ensure_directories_in(home.path()).unwrap();
        std::fs::write(per_user_dir.join("faucet_usage_data.csv"), "").unwrap();

        assert_eq!(discover_data_path(None, cwd.path(), home.path()), local);
    }

    #[test]
    fn test_discover_falls_back_to_home() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        let per_user = ensure_directories_in(home.path())
            .unwrap()
            .join("faucet_usage_data.csv");
        std::fs::write(&per_user, "").unwrap();

        assert_eq!(discover_data_path(None, cwd.path(), home.path()), per_user);
    }

    #[test]
    fn test_discover_missing_returns_first_candidate() {
        let cwd = TempDir::new().expect("tempdir");
        let home = TempDir::new().expect("tempdir");
        assert_eq!(
            discover_data_path(None, cwd.path(), home.path()),
            cwd.path().join("faucet_usage_data.csv")
        );
    }

    #[test]
    fn test_build_generator_without_command_fails_requests() {
        let settings = Settings::parse_from(["water-dashboard"]);
        let generator = build_generator(&settings);
        assert!(generator.complete(&ChatRequest::new("s", "p")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_generator_with_command() {
        let settings = Settings::parse_from([
            "water-dashboard",
            "--advice-command",
            "sh",
            "--advice-arg",
            "-c",
            "--advice-arg",
            "cat > /dev/null; echo Check for leaks.",
        ]);
        let generator = build_generator(&settings);
        assert_eq!(
            generator.complete(&ChatRequest::new("s", "p")).unwrap(),
            "Check for leaks."
        );
    }
}
