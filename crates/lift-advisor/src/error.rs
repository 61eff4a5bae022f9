use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::catalog::CatalogImportError;
use crate::workflows::recommendation::LeadError;
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
    Catalog(CatalogImportError),
    Lead(LeadError),
    Serialization(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Lead(err) => write!(f, "lead error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Lead(err) => Some(err),
            AppError::Serialization(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Catalog(_) => StatusCode::BAD_REQUEST,
            AppError::Lead(LeadError::NoRecommendation) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Lead(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
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

impl From<CatalogImportError> for AppError {
    fn from(value: CatalogImportError) -> Self {
        Self::Catalog(value)
    }
}

impl From<LeadError> for AppError {
    fn from(value: LeadError) -> Self {
        Self::Lead(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_bad_request() {
        let err = AppError::from(CatalogImportError::DuplicateId("pso-11bl".to_string()));
        assert_eq!(
            err.to_string(),
            "catalog error: model identifier 'pso-11bl' appears more than once"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lead_errors_map_to_unprocessable_or_unavailable() {
        let err = AppError::from(LeadError::Email("ops@".to_string()));
        assert_eq!(err.to_string(), "lead error: email 'ops@' is not a valid address");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = AppError::from(LeadError::NoRecommendation);
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn io_errors_map_to_internal_error() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
