//! Request validation
//!
//! Turns a raw `CasinoRequest` into a `SimulationConfig`, or reports the
//! first rule it breaks.

use crate::config::SimulationConfig;
use tracing::info;
use types::errors::ValidationError;
use types::request::CasinoRequest;

/// Either a validated configuration or the single rule that failed.
pub type ValidationOutcome = Result<SimulationConfig, ValidationError>;

/// Validate a simulation request.
///
/// Returns the validated configuration if all checks succeed,
/// otherwise returns the first failing check.
///
/// Checks performed (in order):
/// 1. Request is present
/// 2. Starting amount present and greater than 0
/// 3. Bet amount present and greater than 0
/// 4. Starting amount at least the bet amount
/// 5. Win ratio present and within [0, 1]
/// 6. Round count present and not negative
pub fn validate(request: Option<&CasinoRequest>) -> ValidationOutcome {
    let outcome = check(request);
    match &outcome {
        Ok(config) => info!(
            starting_amount = config.starting_amount(),
            bet_amount = config.bet_amount(),
            win_ratio = config.win_ratio(),
            round_count = config.round_count(),
            "request validated"
        ),
        Err(reason) => info!(code = reason.code(), %reason, "request rejected"),
    }
    outcome
}

/// Validate a request that is known to be present.
pub fn validate_request(request: &CasinoRequest) -> ValidationOutcome {
    validate(Some(request))
}

fn check(request: Option<&CasinoRequest>) -> ValidationOutcome {
    // 1. Request must exist
    let Some(request) = request else {
        return Err(ValidationError::ConfigurationMissing);
    };

    // 2. Starting amount
    let starting_amount = match request.amount {
        Some(amount) if is_positive(amount) => amount,
        _ => return Err(ValidationError::InvalidStartingAmount),
    };

    // 3. Bet amount
    let bet_amount = match request.bet_amount {
        Some(bet) if is_positive(bet) => bet,
        _ => return Err(ValidationError::InvalidBetAmount),
    };

    // 4. Equal is allowed
    if starting_amount < bet_amount {
        return Err(ValidationError::BetExceedsStartingAmount);
    }

    // 5. Win ratio; NaN fails the range check
    let win_ratio = match request.win_ratio {
        Some(ratio) if (0.0..=1.0).contains(&ratio) => ratio,
        _ => return Err(ValidationError::InvalidWinRatio),
    };

    // 6. Round count
    let round_count = match request.game_size.map(u64::try_from) {
        Some(Ok(count)) => count,
        _ => return Err(ValidationError::NegativeRoundCount),
    };

    Ok(SimulationConfig::new(
        starting_amount,
        bet_amount,
        win_ratio,
        round_count,
    ))
}

/// Finite and strictly positive.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}


// ── Property-Based Tests ────────────────────────────────────────────
