use anyhow::Result;

use rota::config::RotaConfig;

/// List logged injections, newest first.
pub fn history(config: &RotaConfig, limit: Option<usize>) -> Result<()> {
    let tracker = super::open_tracker(config)?;
    let records = tracker.history();

    if records.is_empty() {
        println!("No injections logged yet.");
        return Ok(());
    }

    let limit = limit.unwrap_or(records.len());
    for record in records.iter().rev().take(limit) {
        print!(
            "{}  {:<20} {}",
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.site_id,
            record.compound_name
        );
        match &record.notes {
            Some(notes) => println!("  ({notes})"),
            None => println!(),
        }
    }

    eprintln!("Showing {} of {} records.", limit.min(records.len()), records.len());
    Ok(())
}
