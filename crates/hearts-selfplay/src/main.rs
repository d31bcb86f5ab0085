use std::path::PathBuf;

use clap::Parser;

use hearts_selfplay::config::{ResolvedOutputs, SelfPlayConfig};
use hearts_selfplay::logging::init_logging;
use hearts_selfplay::runner::SelfPlayRunner;

/// Self-play harness producing per-decision training feedback.
#[derive(Debug, Parser)]
#[command(
    name = "hearts-selfplay",
    author,
    version,
    about = "Deterministic Hearts self-play feedback generator"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "selfplay.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of games to play.
    #[arg(long, value_name = "GAMES")]
    games: Option<usize>,

    /// Override the master seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Play hearts-only scoring (queen of spades carries no points).
    #[arg(long)]
    simplified: bool,

    /// Exit after validating the configuration.
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SelfPlayConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }
    if let Some(games) = cli.games {
        config.games.count = games;
    }
    if let Some(seed) = cli.seed {
        config.games.seed = seed;
    }
    if cli.simplified {
        config.games.simplified = true;
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let games = config.games.count;
    let kinds = config
        .seats
        .iter()
        .map(|seat| format!("{}={}", seat.name, seat.kind.label()))
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "Loaded configuration '{run_id}': {games} game{} [{kinds}]",
        if games == 1 { "" } else { "s" }
    );

    if cli.validate_only {
        println!("Validation-only mode: no games played.");
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = SelfPlayRunner::new(config, outputs)?;
    let summary = runner.run()?;

    println!(
        "Self-play complete for '{run_id}': {} games -> {} feedback rows at {}",
        summary.games_played,
        summary.rows_written,
        summary.feedback_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(telemetry_path) = summary.telemetry_path.as_ref() {
        println!("Telemetry log: {}", telemetry_path.display());
    }

    Ok(())
}
