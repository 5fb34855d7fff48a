use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use simulation::config::SimulationConfig;
use simulation::engine;
use simulation::metrics::SimulationReport;
use simulation::rng::ChaChaSource;
use simulation::validator;
use tracing::Instrument;
use types::ids::RunId;
use types::outcome::SimulationResult;
use types::request::CasinoRequest;
use types::response::{ServiceResponse, SIMULATION_COMPLETE};

type SimulationPayload = Result<Json<Option<CasinoRequest>>, JsonRejection>;

/// Legacy `casinoGame` endpoint: final balance and bankruptcy round.
pub async fn casino_game(
    State(state): State<AppState>,
    payload: SimulationPayload,
) -> Result<Json<ServiceResponse<SimulationResult>>, AppError> {
    let Json(request) = payload?;
    let config = admit(&state, request.as_ref())?;

    let result = run_blocking(config, |config, rng| engine::run_simulation(config, rng)).await?;

    Ok(Json(ServiceResponse::success(SIMULATION_COMPLETE, result)))
}

/// Same input, payload also carries run statistics.
pub async fn create_simulation(
    State(state): State<AppState>,
    payload: SimulationPayload,
) -> Result<Json<ServiceResponse<SimulationReport>>, AppError> {
    let Json(request) = payload?;
    let config = admit(&state, request.as_ref())?;

    let report =
        run_blocking(config, |config, rng| engine::run_simulation_report(config, rng)).await?;

    Ok(Json(ServiceResponse::success(SIMULATION_COMPLETE, report)))
}

/// 1. Validate the request
/// 2. Cap the work a single request may ask for
fn admit(state: &AppState, request: Option<&CasinoRequest>) -> Result<SimulationConfig, AppError> {
    let config = validator::validate(request)?;

    if config.round_count() > state.max_rounds {
        return Err(AppError::BadRequest(format!(
            "round count {} exceeds limit of {}",
            config.round_count(),
            state.max_rounds
        )));
    }

    Ok(config)
}

/// Play the rounds on the blocking pool with a fresh entropy-seeded source.
async fn run_blocking<T, F>(config: SimulationConfig, run: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&SimulationConfig, &mut ChaChaSource) -> T + Send + 'static,
{
    let run_id = RunId::new();
    let span = tracing::info_span!("simulation", %run_id, rounds = config.round_count());
    let task_span = span.clone();

    tokio::task::spawn_blocking(move || {
        let _guard = task_span.enter();
        let mut rng = ChaChaSource::from_entropy();
        run(&config, &mut rng)
    })
    .instrument(span)
    .await
    .map_err(|e| AppError::InternalError(anyhow::anyhow!("simulation task failed: {e}")))
}
