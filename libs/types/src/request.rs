//! Raw simulation request
//!
//! Every field is optional: an absent field is a validation failure, not a
//! deserialization failure, so callers get the ordered rejection reason.

use serde::{Deserialize, Serialize};

/// Unvalidated casino game request as received from a caller.
///
/// Wire names follow the legacy `casinoGame` endpoint (`amount`,
/// `betAmount`, `winRatio`, `gameSize`); `startingAmount` and `roundCount`
/// are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasinoRequest {
    /// Starting balance of the player
    #[serde(default, alias = "startingAmount")]
    pub amount: Option<f64>,
    /// Fixed stake per round
    #[serde(default)]
    pub bet_amount: Option<f64>,
    /// Probability in [0, 1] that the player wins a round
    #[serde(default)]
    pub win_ratio: Option<f64>,
    /// Maximum number of rounds to play
    #[serde(default, alias = "roundCount")]
    pub game_size: Option<i64>,
}

impl CasinoRequest {
    /// Build a fully-populated request.
    pub fn new(amount: f64, bet_amount: f64, win_ratio: f64, game_size: i64) -> Self {
        Self {
            amount: Some(amount),
            bet_amount: Some(bet_amount),
            win_ratio: Some(win_ratio),
            game_size: Some(game_size),
        }
    }
}
