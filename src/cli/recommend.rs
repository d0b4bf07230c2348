//! CLI `recommend` command — list the next sites to use for an injection type.

use anyhow::Result;

use rota::config::RotaConfig;
use rota::rotation::types::InjectionType;

pub fn recommend(
    config: &RotaConfig,
    injection_type: InjectionType,
    count: Option<usize>,
) -> Result<()> {
    let tracker = super::open_tracker(config)?;
    let count = count.unwrap_or(config.policy.recommendation_count);

    let recommendations = tracker.next_recommended(injection_type, count);
    if recommendations.is_empty() {
        println!("No {injection_type} sites in the catalog.");
        return Ok(());
    }

    println!("Next {injection_type} sites");
    println!("{}", "=".repeat(40));
    for (rank, rec) in recommendations.iter().enumerate() {
        let label = tracker
            .catalog()
            .get(&rec.site_id)
            .map(|s| s.anatomical_label.as_str())
            .unwrap_or("");
        let since = match rec.days_since_last_use {
            Some(days) => format!("{days} days ago"),
            None => "never used".to_string(),
        };
        println!("  {}. {:<20} {:<24} {}", rank + 1, rec.site_id, label, since);
    }

    Ok(())
}
