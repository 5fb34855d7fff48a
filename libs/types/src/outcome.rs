//! Simulation result record

use serde::{Deserialize, Serialize};

/// Final state of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Balance after the loop stopped, by exhaustion or bankruptcy
    #[serde(rename = "endAmount", alias = "endingAmount")]
    pub ending_amount: f64,
    /// Zero-based round in which the balance first reached zero or below
    #[serde(rename = "bankruptRound", default)]
    pub bankrupt_round: Option<u64>,
}

impl SimulationResult {
    /// Whether the run ended in bankruptcy
    pub fn is_bankrupt(&self) -> bool {
        self.bankrupt_round.is_some()
    }
}
