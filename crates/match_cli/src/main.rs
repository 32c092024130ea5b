//! Match runner CLI
//!
//! Generates two demo squads, plays one match and prints the result.
//! Logs go to stderr (`RUST_LOG=match_core=debug` for goals and phase changes).

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use match_core::models::Side;
#[cfg(feature = "cli")]
use match_core::roster::generate_squad;
#[cfg(feature = "cli")]
use match_core::{simulate_with_config, MatchResult, SimConfig};
#[cfg(feature = "cli")]
use rand::SeedableRng;
#[cfg(feature = "cli")]
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "match_cli")]
#[command(about = "Play a deterministic demo match", long_about = None)]
struct Cli {
    /// Match seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Seed for squad attribute generation
    #[arg(long, default_value_t = 12345)]
    squad_seed: u64,

    /// Home team name
    #[arg(long, default_value = "Home FC")]
    home: String,

    /// Away team name
    #[arg(long, default_value = "Away United")]
    away: String,

    /// JSON file with engine overrides (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full result as JSON instead of text
    #[arg(long, default_value = "false")]
    json: bool,

    /// Also print the event log (text mode only)
    #[arg(long, default_value = "false")]
    events: bool,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };

    let mut rng = ChaCha8Rng::seed_from_u64(cli.squad_seed);
    let home = generate_squad("H", &cli.home, Side::Home, &mut rng).context("building home squad")?;
    let away = generate_squad("A", &cli.away, Side::Away, &mut rng).context("building away squad")?;

    let result = simulate_with_config(home, away, cli.seed, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, cli.events);
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

#[cfg(feature = "cli")]
fn load_config(path: &std::path::Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SimConfig::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(feature = "cli")]
fn print_report(result: &MatchResult, with_events: bool) {
    print!("{}", result.to_text());

    let stats = &result.stats;
    for side in [Side::Home, Side::Away] {
        let team = result.team(side);
        println!(
            "{:<20} possession {:>5.1}%  shots {:>3}  conversion {:>5.1}%",
            team.name,
            stats.possession_pct(side),
            stats.shots(side),
            stats.conversion_pct(side, result.score(side)),
        );
    }

    if with_events {
        println!();
        print!("{}", result.event_report());
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("match_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
