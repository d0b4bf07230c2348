use anyhow::Result;

use rota::config::RotaConfig;

/// Export the full history as JSON to stdout.
pub fn export(config: &RotaConfig) -> Result<()> {
    let tracker = super::open_tracker(config)?;

    let json = serde_json::to_string_pretty(tracker.history())?;
    println!("{json}");

    eprintln!("Exported {} injection records.", tracker.history().len());

    Ok(())
}
