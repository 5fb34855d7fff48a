//! Response envelope
//!
//! Serialized as `{"status": "success", "message": ..., "data": ...}` or
//! `{"status": "failure", "message": ...}`.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Message attached to every completed simulation.
pub const SIMULATION_COMPLETE: &str = "Simulation Complete";

/// Success-or-failure wrapper around a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ServiceResponse<T> {
    Success { message: String, data: T },
    Failure { message: String },
}

impl<T> ServiceResponse<T> {
    /// Wrap a payload as a success with the given message.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        ServiceResponse::Success {
            message: message.into(),
            data,
        }
    }

    /// Wrap a rejection reason as a failure.
    pub fn failure(reason: impl ToString) -> Self {
        ServiceResponse::Failure {
            message: reason.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResponse::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceResponse::Success { message, .. } | ServiceResponse::Failure { message } => {
                message
            }
        }
    }

    /// Payload of a success, `None` for a failure.
    pub fn data(&self) -> Option<&T> {
        match self {
            ServiceResponse::Success { data, .. } => Some(data),
            ServiceResponse::Failure { .. } => None,
        }
    }

    /// Convert into a `Result`, keeping the failure message.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ServiceResponse::Success { data, .. } => Ok(data),
            ServiceResponse::Failure { message } => Err(message),
        }
    }

    /// Map the payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResponse<U> {
        match self {
            ServiceResponse::Success { message, data } => ServiceResponse::Success {
                message,
                data: f(data),
            },
            ServiceResponse::Failure { message } => ServiceResponse::Failure { message },
        }
    }
}

impl<T> From<Result<T, ValidationError>> for ServiceResponse<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(data) => ServiceResponse::success(SIMULATION_COMPLETE, data),
            Err(err) => ServiceResponse::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::SimulationResult;
    use serde_json::json;

    #[test]
    fn test_success_wire_shape() {
        let resp = ServiceResponse::success(
            SIMULATION_COMPLETE,
            SimulationResult {
                ending_amount: 40.0,
                bankrupt_round: None,
            },
        );
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "success",
                "message": "Simulation Complete",
                "data": { "endAmount": 40.0, "bankruptRound": null }
            })
        );
    }

    #[test]
    fn test_failure_wire_shape() {
        let resp: ServiceResponse<SimulationResult> =
            ServiceResponse::failure(ValidationError::InvalidWinRatio);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({ "status": "failure", "message": "win ratio must be between 0 and 1" })
        );
        assert!(!resp.is_success());
        assert!(resp.data().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: ServiceResponse<u32> = Ok(7).into();
        assert_eq!(ok.message(), SIMULATION_COMPLETE);
        assert_eq!(ok.into_result(), Ok(7));

        let err: ServiceResponse<u32> = Err(ValidationError::InvalidBetAmount).into();
        assert_eq!(
            err.into_result(),
            Err("bet amount must be greater than 0".to_string())
        );
    }

    #[test]
    fn test_map_keeps_failure() {
        let resp: ServiceResponse<u32> = ServiceResponse::failure("nope");
        let mapped = resp.map(|n| n * 2);
        assert_eq!(mapped, ServiceResponse::Failure { message: "nope".into() });

        let ok = ServiceResponse::success("done", 2u32).map(|n| n * 2);
        assert_eq!(ok.data(), Some(&4));
    }
}
