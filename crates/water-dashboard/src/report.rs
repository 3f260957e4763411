//! Non-interactive `--report` mode.

use std::io::Write;
use std::path::Path;

use water_data::analysis::analyze_faucet_data;
use water_runtime::advisor::{AdviceRequester, AdviceState};
use water_runtime::generator::TextGenerator;

/// Write the text report for `data_path` to `out`, followed by faucet advice
/// when an advisor is given.
///
/// Analysis failures become an error carrying the user-facing message. Advice
/// failures are printed in place of the advice.
pub fn write_report<W: Write, G: TextGenerator>(
    out: &mut W,
    data_path: &Path,
    advisor: Option<&AdviceRequester<G>>,
) -> anyhow::Result<()> {
    let result = analyze_faucet_data(data_path).map_err(|e| {
        tracing::error!(path = %data_path.display(), error = %e, "report failed");
        anyhow::anyhow!(e.user_message())
    })?;

    write!(out, "{}", result.report.render_text())?;
    writeln!(out)?;
    writeln!(out, "Readings per Faucet: {}", result.readings_per_faucet())?;
    writeln!(out, "{}", result.overview())?;

    if let Some(advisor) = advisor {
        let advice = AdviceState::from_result(advisor.faucet_advice(&result.report.summary));
        writeln!(out)?;
        writeln!(out, "AI-Generated Water-Saving Advice")?;
        writeln!(out, "{}", advice.text())?;
    }
    Ok(())
}
