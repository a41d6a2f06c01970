use anyhow::Context;
use segkit::{init_logging, run_session, Config, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("SegKit {} (built {})", VERSION, BUILD_DATE);

    let path = Config::config_path().context("Failed to locate config file")?;
    let config = Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let stdin = std::io::BufReader::new(std::io::stdin());
    let summary = run_session(&config, stdin)?;

    tracing::info!(
        "Session ended: {} frames, {} commands, {} selection changes, {} selected",
        summary.frames,
        summary.commands_applied,
        summary.selection_changes,
        summary.selected
    );
    Ok(())
}
