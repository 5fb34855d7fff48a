//! Validate-then-run facade
//!
//! Mirrors what a transport layer does with a request: validate, bail out
//! with the rejection reason, otherwise run and wrap the result.

use crate::engine::{run_simulation, run_simulation_report};
use crate::metrics::SimulationReport;
use crate::rng::RandomSource;
use crate::validator::validate;
use types::outcome::SimulationResult;
use types::request::CasinoRequest;
use types::response::ServiceResponse;

/// Simulate a casino game request.
///
/// The engine never runs for a rejected request.
pub fn simulate_casino<R: RandomSource + ?Sized>(
    request: Option<&CasinoRequest>,
    rng: &mut R,
) -> ServiceResponse<SimulationResult> {
    validate(request)
        .map(|config| run_simulation(&config, rng))
        .into()
}

/// Same as `simulate_casino` but the payload also carries run statistics.
pub fn simulate_with_report<R: RandomSource + ?Sized>(
    request: Option<&CasinoRequest>,
    rng: &mut R,
) -> ServiceResponse<SimulationReport> {
    validate(request)
        .map(|config| run_simulation_report(&config, rng))
        .into()
}
