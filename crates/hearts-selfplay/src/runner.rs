use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hearts_bot::{Agent, AgentKind, AgentTrace};
use hearts_core::EngineError;
use hearts_core::game::{GameConfig, Policy, play_game_with_seed};
use hearts_core::history::{Interpretation, interpret_history_discounted};
use hearts_core::model::seat::Seat;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::analytics::{AnalyticsCollector, AnalyticsError};
use crate::config::{ResolvedOutputs, SelfPlayConfig};
use crate::logging::telemetry_dir;

/// Plays the configured games and streams per-decision feedback to disk.
pub struct SelfPlayRunner {
    config: SelfPlayConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub games_played: usize,
    pub rows_written: usize,
    pub feedback_path: PathBuf,
    pub summary_path: PathBuf,
    pub telemetry_path: Option<PathBuf>,
}

/// One JSONL line: a single decision and the return that followed it.
#[derive(Debug, Serialize)]
struct FeedbackRow<'a> {
    run_id: &'a str,
    game_index: usize,
    game_seed: u64,
    seat: &'static str,
    agent: &'a str,
    kind: AgentKind,
    step: usize,
    card: String,
    expected: f64,
    actual: f64,
    reward: f64,
    hearts_broken: bool,
    trick_cards: usize,
    trace: &'a AgentTrace,
}

impl SelfPlayRunner {
    pub fn new(config: SelfPlayConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        if config.seats.len() != Seat::COUNT {
            return Err(RunnerError::SeatCount {
                found: config.seats.len(),
            });
        }
        Ok(Self { config, outputs })
    }

    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.feedback_jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.feedback_jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.games.seed);
        let mut analytics = AnalyticsCollector::new(&self.config);
        let mut rows_written = 0usize;

        for game_index in 0..self.config.games.count {
            let game_seed = rng.next_u64();
            let interpretations = self.play_one(game_index, game_seed)?;
            for (seat_index, interpretation) in interpretations.iter().enumerate() {
                analytics.record_seat(seat_index, interpretation)?;
                rows_written += self.write_rows(
                    &mut writer,
                    game_index,
                    game_seed,
                    seat_index,
                    interpretation,
                )?;
            }
        }

        writer.flush()?;

        let summary = analytics.finalize();
        summary.write_markdown(&self.config.run_id, &self.outputs.summary_md)?;

        let telemetry_path = self
            .config
            .logging
            .enable_structured
            .then(|| telemetry_dir(&self.outputs).join("telemetry.jsonl"));

        Ok(RunSummary {
            games_played: self.config.games.count,
            rows_written,
            feedback_path: self.outputs.feedback_jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            telemetry_path,
        })
    }

    fn play_one(
        &self,
        game_index: usize,
        game_seed: u64,
    ) -> Result<Vec<Interpretation<AgentTrace>>, RunnerError> {
        let mut agents = self.spawn_agents(game_seed);
        let [north, east, south, west] = &mut agents;
        let policies: [&mut dyn Policy<AgentTrace>; 4] = [north, east, south, west];
        let outcome = play_game_with_seed(
            policies,
            GameConfig {
                simplified: self.config.games.simplified,
                seed: game_seed,
            },
        )
        .map_err(|source| RunnerError::Engine { game_index, source })?;

        let scores = outcome.scores();
        event!(
            target: "hearts_selfplay::runner",
            Level::INFO,
            run_id = %self.config.run_id,
            game_index,
            game_seed,
            north = scores[0],
            east = scores[1],
            south = scores[2],
            west = scores[3],
        );

        outcome
            .into_histories()
            .into_iter()
            .map(|history| {
                interpret_history_discounted(history, self.config.interpreter.discount)
                    .map_err(|source| RunnerError::Engine { game_index, source })
            })
            .collect()
    }

    /// Per-seat seeds are derived from the game seed so a game replays exactly.
    fn spawn_agents(&self, game_seed: u64) -> [Agent; 4] {
        let mut seeder = StdRng::seed_from_u64(game_seed);
        std::array::from_fn(|index| Agent::new(self.config.seats[index].kind, seeder.next_u64()))
    }

    fn write_rows(
        &self,
        writer: &mut BufWriter<File>,
        game_index: usize,
        game_seed: u64,
        seat_index: usize,
        interpretation: &Interpretation<AgentTrace>,
    ) -> Result<usize, RunnerError> {
        let seat_config = &self.config.seats[seat_index];
        let mut rows_written = 0usize;
        for (step, feedback) in interpretation.feedback.iter().enumerate() {
            let row = FeedbackRow {
                run_id: &self.config.run_id,
                game_index,
                game_seed,
                seat: feedback.actor.label(),
                agent: &seat_config.name,
                kind: seat_config.kind,
                step,
                card: feedback.action.to_string(),
                expected: feedback.expected,
                actual: feedback.actual,
                reward: feedback.reward,
                hearts_broken: feedback.state.hearts_broken(),
                trick_cards: feedback.state.trick().len(),
                trace: &feedback.trace,
            };
            serde_json::to_writer(&mut *writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
        }
        Ok(rows_written)
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize feedback row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("game {game_index} failed: {source}")]
    Engine {
        game_index: usize,
        #[source]
        source: EngineError,
    },
    #[error("configuration requires exactly 4 seats but found {found}")]
    SeatCount { found: usize },
    #[error("analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}
