//! Round-by-round betting engine
//!
//! Plays a validated configuration for up to `round_count` rounds. Each
//! round draws one uniform sample: below the win ratio the stake is won,
//! otherwise it is lost. Losses never push the balance below zero, and the
//! run stops in the first round that leaves the balance at zero or less.

use crate::config::SimulationConfig;
use crate::events::{RoundEvent, RoundOutcome};
use crate::metrics::{SimMetrics, SimulationReport};
use crate::rng::RandomSource;
use tracing::{debug, trace};
use types::outcome::SimulationResult;

/// Upper bound on events preallocated by `run_simulation_traced`.
const TRACE_PREALLOC_LIMIT: u64 = 4_096;

/// Run a simulation and return only its final state.
pub fn run_simulation<R: RandomSource + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> SimulationResult {
    run_rounds(config, rng, |_| {})
}

/// Run a simulation and keep every resolved round.
pub fn run_simulation_traced<R: RandomSource + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> (SimulationResult, Vec<RoundEvent>) {
    let capacity = config.round_count().min(TRACE_PREALLOC_LIMIT) as usize;
    let mut events = Vec::with_capacity(capacity);
    let result = run_rounds(config, rng, |event| events.push(*event));
    (result, events)
}

/// Run a simulation and aggregate per-round statistics on the fly.
pub fn run_simulation_report<R: RandomSource + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> SimulationReport {
    let mut metrics = SimMetrics::new(config.starting_amount());
    let result = run_rounds(config, rng, |event| metrics.record_round(event));
    SimulationReport { result, metrics }
}

/// Resolve one round from a draw.
///
/// `draw >= win_ratio` is a loss, so a ratio of 0 always loses and a ratio
/// of 1 always wins for draws in [0, 1).
pub fn resolve_round(
    round: u64,
    balance: f64,
    config: &SimulationConfig,
    draw: f64,
) -> RoundEvent {
    let (outcome, balance_after) = if draw >= config.win_ratio() {
        (RoundOutcome::Loss, (balance - config.bet_amount()).max(0.0))
    } else {
        (RoundOutcome::Win, balance + config.bet_amount())
    };

    RoundEvent {
        round,
        draw,
        outcome,
        balance_before: balance,
        balance_after,
    }
}

fn run_rounds<R, F>(config: &SimulationConfig, rng: &mut R, mut on_round: F) -> SimulationResult
where
    R: RandomSource + ?Sized,
    F: FnMut(&RoundEvent),
{
    let mut balance = config.starting_amount();
    let mut bankrupt_round = None;

    for round in 0..config.round_count() {
        let event = resolve_round(round, balance, config, rng.next_unit());
        trace!(
            game = round + 1,
            result = %event.outcome,
            amount = event.balance_before,
            balance = event.balance_after,
            "round resolved"
        );
        on_round(&event);
        balance = event.balance_after;

        if event.is_bankrupting() {
            bankrupt_round = Some(round);
            break;
        }
    }

    debug!(
        ending_amount = balance,
        bankrupt_round = ?bankrupt_round,
        "simulation finished"
    );

    SimulationResult {
        ending_amount: balance,
        bankrupt_round,
    }
}
