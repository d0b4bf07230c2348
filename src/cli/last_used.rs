use anyhow::Result;

use rota::config::RotaConfig;
use rota::rotation::types::SiteId;

/// Print when a site was last used.
pub fn last_used(config: &RotaConfig, site: &str) -> Result<()> {
    let tracker = super::open_tracker(config)?;

    match tracker.last_used(&SiteId::new(site)) {
        Some(ts) => println!("{site}: {}", ts.to_rfc3339()),
        None => println!("{site}: never"),
    }

    Ok(())
}
