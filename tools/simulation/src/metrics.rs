//! Run statistics
//!
//! Aggregates round events into win/loss counts and balance extremes.

use crate::events::{RoundEvent, RoundOutcome};
use serde::{Deserialize, Serialize};
use types::outcome::SimulationResult;

/// Aggregated statistics for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimMetrics {
    pub rounds_played: u64,
    pub wins: u64,
    pub losses: u64,
    pub starting_balance: f64,
    pub peak_balance: f64,
    pub trough_balance: f64,
    pub net_change: f64,
}

impl SimMetrics {
    /// Empty metrics for a run starting at `starting_balance`.
    pub fn new(starting_balance: f64) -> Self {
        Self {
            rounds_played: 0,
            wins: 0,
            losses: 0,
            starting_balance,
            peak_balance: starting_balance,
            trough_balance: starting_balance,
            net_change: 0.0,
        }
    }

    /// Fold a whole event list.
    pub fn from_events(starting_balance: f64, events: &[RoundEvent]) -> Self {
        let mut metrics = Self::new(starting_balance);
        for event in events {
            metrics.record_round(event);
        }
        metrics
    }

    /// Record a single resolved round.
    pub fn record_round(&mut self, event: &RoundEvent) {
        self.rounds_played += 1;
        match event.outcome {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Loss => self.losses += 1,
        }
        self.peak_balance = self.peak_balance.max(event.balance_after);
        self.trough_balance = self.trough_balance.min(event.balance_after);
        self.net_change = event.balance_after - self.starting_balance;
    }

    /// Observed share of rounds won, `None` before any round.
    pub fn win_rate(&self) -> Option<f64> {
        if self.rounds_played == 0 {
            None
        } else {
            Some(self.wins as f64 / self.rounds_played as f64)
        }
    }
}

/// Final state of a run together with its statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub result: SimulationResult,
    pub metrics: SimMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(round: u64, outcome: RoundOutcome, before: f64, after: f64) -> RoundEvent {
        RoundEvent {
            round,
            draw: 0.5,
            outcome,
            balance_before: before,
            balance_after: after,
        }
    }

    #[test]
    fn test_new_metrics_empty() {
        let metrics = SimMetrics::new(100.0);
        assert_eq!(metrics.rounds_played, 0);
        assert_eq!(metrics.peak_balance, 100.0);
        assert_eq!(metrics.trough_balance, 100.0);
        assert_eq!(metrics.win_rate(), None);
    }

    #[test]
    fn test_from_events() {
        let events = vec![
            event(0, RoundOutcome::Win, 10.0, 15.0),
            event(1, RoundOutcome::Win, 15.0, 20.0),
            event(2, RoundOutcome::Loss, 20.0, 15.0),
            event(3, RoundOutcome::Loss, 15.0, 10.0),
            event(4, RoundOutcome::Loss, 10.0, 5.0),
        ];
        let metrics = SimMetrics::from_events(10.0, &events);
        assert_eq!(metrics.rounds_played, 5);
        assert_eq!(metrics.wins, 2);
        assert_eq!(metrics.losses, 3);
        assert_eq!(metrics.peak_balance, 20.0);
        assert_eq!(metrics.trough_balance, 5.0);
        assert_eq!(metrics.net_change, -5.0);
        assert_eq!(metrics.win_rate(), Some(0.4));
    }

    #[test]
    fn test_report_serializes() {
        let report = SimulationReport {
            result: SimulationResult {
                ending_amount: 0.0,
                bankrupt_round: Some(0),
            },
            metrics: SimMetrics::from_events(
                10.0,
                &[event(0, RoundOutcome::Loss, 10.0, 0.0)],
            ),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"]["bankruptRound"], 0);
        assert_eq!(json["metrics"]["losses"], 1);
        assert_eq!(json["metrics"]["troughBalance"], 0.0);
    }
}
