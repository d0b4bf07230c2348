//! CLI `recency` command — freshness of one site or the whole catalog.

use anyhow::Result;

use rota::config::RotaConfig;
use rota::rotation::types::SiteId;

pub fn recency(config: &RotaConfig, site: Option<&str>) -> Result<()> {
    let tracker = super::open_tracker(config)?;

    if let Some(site) = site {
        println!("{site}: {}", tracker.recency(&SiteId::new(site)));
        return Ok(());
    }

    println!("Site Recency");
    println!("{}", "=".repeat(60));
    for status in tracker.recency_map() {
        let last = status
            .last_used
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<20} {:<5} {:<10} {:<8} {}",
            status.site.id, status.site.injection_type, status.site.view, status.recency, last
        );
    }

    Ok(())
}
