//! CLI `log` command — record an injection at the current time.

use anyhow::Result;

use rota::config::RotaConfig;
use rota::rotation::recency::Recency;
use rota::rotation::types::SiteId;

pub fn log(config: &RotaConfig, site: &str, compound: &str, notes: Option<&str>) -> Result<()> {
    let mut tracker = super::open_tracker(config)?;

    // Bucket as it stood before this injection.
    let previous = tracker.recency(&SiteId::new(site));

    let record = tracker.log_injection(SiteId::new(site), compound, notes)?;

    println!(
        "Logged {} at {} ({})",
        record.compound_name,
        record.site_id,
        record.timestamp.to_rfc3339()
    );
    if matches!(previous, Recency::Recent | Recency::Caution) {
        println!("  Note: this site was marked `{previous}` before this injection.");
    }
    println!("  Rotation score now: {}", tracker.rotation_score());

    Ok(())
}
