use anyhow::Result;

use rota::config::RotaConfig;

/// Display the rotation score, optionally with its factors.
pub fn score(config: &RotaConfig, breakdown: bool) -> Result<()> {
    let tracker = super::open_tracker(config)?;

    if !breakdown {
        println!("{}", tracker.rotation_score());
        return Ok(());
    }

    let b = tracker.score_breakdown();
    println!("Rotation Score: {}", b.score);
    println!("{}", "=".repeat(40));
    println!("  Records considered:  {}", b.window_len);
    println!("  Distinct sites:      {}", b.distinct_sites);
    println!("  Diversity:           {:.2}", b.diversity);
    println!("  Repeat penalty:      {:.2}", b.repeat_penalty);
    println!("  Evenness:            {:.2}", b.evenness);

    Ok(())
}
