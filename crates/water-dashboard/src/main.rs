mod bootstrap;
mod report;

use anyhow::Result;
use water_core::settings::{home_dir, Settings};
use water_runtime::advisor::AdviceRequester;
use water_runtime::navigation::Screen;
use water_runtime::session::AnalysisSession;
use water_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, &settings.effective_log_file())?;

    tracing::info!("Water Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Screen: {}, Theme: {}, Report: {}",
        settings.screen,
        settings.theme,
        settings.report
    );

    let cwd = std::env::current_dir()?;
    let data_path =
        bootstrap::discover_data_path(settings.data_file.as_deref(), &cwd, &home_dir());
    tracing::info!(path = %data_path.display(), "using faucet data file");

    let advisor = AdviceRequester::new(bootstrap::build_generator(&settings));

    if settings.report {
        let advisor = settings.advice_command.as_ref().map(|_| &advisor);
        let mut stdout = std::io::stdout().lock();
        return report::write_report(&mut stdout, &data_path, advisor);
    }

    let session = AnalysisSession::new(data_path);
    let app = App::new(
        &settings.theme,
        Screen::from_key(&settings.screen),
        session,
        advisor,
    );

    // Ctrl+C is also caught at the OS level in case it arrives outside raw mode.
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down");
            water_ui::app::restore_terminal()?;
        }
    }

    tracing::info!("Water Dashboard exiting");
    Ok(())
}
