mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rota::config;
use rota::rotation::types::InjectionType;

#[derive(Parser)]
#[command(name = "rota", version, about = "Injection-site rotation tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record an injection at a site, timestamped now
    Log {
        /// Site id from the catalog
        site: String,
        /// Compound that was injected
        compound: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show when a site was last used
    LastUsed { site: String },
    /// Recommend the next sites for an injection type (subq or im)
    Recommend {
        #[arg(value_parser = parse_injection_type)]
        injection_type: InjectionType,
        /// Number of candidates (defaults to policy.recommendation_count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Show the rotation score
    Score {
        /// Also print the factors behind the score
        #[arg(long)]
        breakdown: bool,
    },
    /// Show recency for one site, or every catalog site
    Recency { site: Option<String> },
    /// List logged injections, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the whole history as JSON
    Export,
    /// Check database health
    Doctor,
}

fn parse_injection_type(s: &str) -> Result<InjectionType, String> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::RotaConfig::load()?;

    // Log to stderr so stdout stays clean for command output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Log {
            site,
            compound,
            notes,
        } => cli::log::log(&config, &site, &compound, notes.as_deref())?,
        Command::LastUsed { site } => cli::last_used::last_used(&config, &site)?,
        Command::Recommend {
            injection_type,
            count,
        } => cli::recommend::recommend(&config, injection_type, count)?,
        Command::Score { breakdown } => cli::score::score(&config, breakdown)?,
        Command::Recency { site } => cli::recency::recency(&config, site.as_deref())?,
        Command::History { limit } => cli::history::history(&config, limit)?,
        Command::Export => cli::export::export(&config)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
    }

    Ok(())
}
