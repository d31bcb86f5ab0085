use std::fs;
use std::path::Path;

use hearts_bot::{AgentKind, AgentTrace};
use hearts_core::history::Interpretation;
use serde::Serialize;
use thiserror::Error;

use crate::config::SelfPlayConfig;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("seat index {0} is outside the table")]
    UnknownSeat(usize),
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Running per-seat totals across every game of a run.
pub struct AnalyticsCollector {
    seats: Vec<SeatAccumulator>,
    simplified: bool,
    discount: f64,
}

impl AnalyticsCollector {
    pub fn new(config: &SelfPlayConfig) -> Self {
        let seats = config
            .seats
            .iter()
            .map(|seat| SeatAccumulator::new(seat.name.clone(), seat.kind))
            .collect();
        Self {
            seats,
            simplified: config.games.simplified,
            discount: config.interpreter.discount,
        }
    }

    pub fn record_seat(
        &mut self,
        seat_index: usize,
        interpretation: &Interpretation<AgentTrace>,
    ) -> Result<(), AnalyticsError> {
        let acc = self
            .seats
            .get_mut(seat_index)
            .ok_or(AnalyticsError::UnknownSeat(seat_index))?;
        acc.record(interpretation);
        Ok(())
    }

    pub fn finalize(self) -> AnalyticsSummary {
        AnalyticsSummary {
            simplified: self.simplified,
            discount: self.discount,
            seats: self
                .seats
                .into_iter()
                .map(SeatAccumulator::into_report)
                .collect(),
        }
    }
}

struct SeatAccumulator {
    name: String,
    kind: AgentKind,
    games: u32,
    total_score: u64,
    total_return: f64,
    decisions: u64,
    total_expected: f64,
    total_abs_error: f64,
}

impl SeatAccumulator {
    fn new(name: String, kind: AgentKind) -> Self {
        Self {
            name,
            kind,
            games: 0,
            total_score: 0,
            total_return: 0.0,
            decisions: 0,
            total_expected: 0.0,
            total_abs_error: 0.0,
        }
    }

    fn record(&mut self, interpretation: &Interpretation<AgentTrace>) {
        self.games += 1;
        self.total_score += u64::from(interpretation.score);
        self.total_return += interpretation.reward;
        for feedback in &interpretation.feedback {
            self.decisions += 1;
            self.total_expected += feedback.expected;
            self.total_abs_error += feedback.error().abs();
        }
    }

    fn into_report(self) -> SeatReport {
        let per_game = |total: f64| {
            if self.games == 0 {
                0.0
            } else {
                total / f64::from(self.games)
            }
        };
        let per_decision = |total: f64| {
            if self.decisions == 0 {
                0.0
            } else {
                total / self.decisions as f64
            }
        };
        SeatReport {
            avg_score: per_game(self.total_score as f64),
            avg_return: per_game(self.total_return),
            avg_expected: per_decision(self.total_expected),
            mean_abs_error: per_decision(self.total_abs_error),
            name: self.name,
            kind: self.kind,
            games: self.games,
            decisions: self.decisions,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeatReport {
    pub name: String,
    pub kind: AgentKind,
    pub games: u32,
    pub decisions: u64,
    pub avg_score: f64,
    pub avg_return: f64,
    pub avg_expected: f64,
    pub mean_abs_error: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub simplified: bool,
    pub discount: f64,
    pub seats: Vec<SeatReport>,
}

impl AnalyticsSummary {
    pub fn render_markdown(&self, run_id: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Self-play Summary: {run_id}\n\n"));
        out.push_str(&format!(
            "Rules: {} | Discount: {:.3}\n\n",
            if self.simplified { "simplified" } else { "standard" },
            self.discount
        ));
        out.push_str("| Seat | Kind | Games | Decisions | Avg score | Avg return | Avg expected | MAE |\n");
        out.push_str("|------|------|-------|-----------|-----------|------------|--------------|-----|\n");
        for seat in &self.seats {
            out.push_str(&format!(
                "| {name} | {kind} | {games} | {decisions} | {score:.3} | {ret:+.3} | {expected:+.3} | {mae:.3} |\n",
                name = seat.name,
                kind = seat.kind.label(),
                games = seat.games,
                decisions = seat.decisions,
                score = seat.avg_score,
                ret = seat.avg_return,
                expected = seat.avg_expected,
                mae = seat.mean_abs_error,
            ));
        }
        out
    }

    pub fn write_markdown(&self, run_id: &str, path: impl AsRef<Path>) -> Result<(), AnalyticsError> {
        fs::write(path.as_ref(), self.render_markdown(run_id)).map_err(|source| {
            AnalyticsError::Io {
                context: "writing summary markdown",
                source,
            }
        })
    }
}
