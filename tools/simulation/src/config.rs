//! Validated simulation configuration

use serde::Serialize;

/// Betting configuration that has passed every validation rule.
///
/// Only `validator::validate` can build one, so holding a
/// `SimulationConfig` is proof that:
/// - `starting_amount > 0`
/// - `0 < bet_amount <= starting_amount`
/// - `0 <= win_ratio <= 1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    starting_amount: f64,
    bet_amount: f64,
    win_ratio: f64,
    round_count: u64,
}

impl SimulationConfig {
    pub(crate) fn new(
        starting_amount: f64,
        bet_amount: f64,
        win_ratio: f64,
        round_count: u64,
    ) -> Self {
        Self {
            starting_amount,
            bet_amount,
            win_ratio,
            round_count,
        }
    }

    pub fn starting_amount(&self) -> f64 {
        self.starting_amount
    }

    pub fn bet_amount(&self) -> f64 {
        self.bet_amount
    }

    pub fn win_ratio(&self) -> f64 {
        self.win_ratio
    }

    /// Upper bound on rounds; fewer run if the player goes bankrupt.
    pub fn round_count(&self) -> u64 {
        self.round_count
    }
}
