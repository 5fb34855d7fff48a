//! Per-round outcome records
//!
//! One `RoundEvent` per resolved round. Used for tracing, metrics, and
//! asserting exact sequences in tests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single round resolved for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoundOutcome {
    Win,
    Loss,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Win => write!(f, "WIN"),
            RoundOutcome::Loss => write!(f, "LOSS"),
        }
    }
}

/// A resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundEvent {
    /// Zero-based round index
    pub round: u64,
    /// Uniform sample compared against the win ratio
    pub draw: f64,
    pub outcome: RoundOutcome,
    pub balance_before: f64,
    pub balance_after: f64,
}

impl RoundEvent {
    /// Signed balance change over the round.
    pub fn delta(&self) -> f64 {
        self.balance_after - self.balance_before
    }

    /// Whether this round left the player with nothing.
    pub fn is_bankrupting(&self) -> bool {
        self.balance_after <= 0.0
    }
}
