use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::advisor::{AdvisorServiceError, EngineError, HiscoresError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Advisor(AdvisorServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Advisor(err) => write!(f, "advisor error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Advisor(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Advisor(AdvisorServiceError::Hiscores(HiscoresError::Fetch(_))) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Advisor(AdvisorServiceError::Hiscores(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Advisor(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AdvisorServiceError> for AppError {
    fn from(value: AdvisorServiceError) -> Self {
        Self::Advisor(value)
    }
}

impl From<HiscoresError> for AppError {
    fn from(value: HiscoresError) -> Self {
        Self::Advisor(AdvisorServiceError::Hiscores(value))
    }
}

impl From<EngineError> for AppError {
    fn from(value: EngineError) -> Self {
        Self::Advisor(AdvisorServiceError::Engine(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiscores_failures_map_to_unprocessable() {
        let error = AppError::from(AdvisorServiceError::Hiscores(HiscoresError::PlayerNotFound));
        assert_eq!(error.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_faults_are_internal_errors() {
        let error = AppError::from(EngineError::NoEvaluators);
        assert!(error.to_string().contains("internal configuration error"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_player_name_is_unprocessable() {
        let error = AppError::from(HiscoresError::MissingPlayerName);
        assert!(error.to_string().contains("player name is required"));
        assert_eq!(error.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
