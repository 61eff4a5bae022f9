use crate::config::{AppEnvironment, TelemetryConfig};
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "invalid log filter '{value}' for the advisor service")
            }
            TelemetryError::Subscriber(err) => write!(f, "tracing subscriber error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig, environment: AppEnvironment) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(environment == AppEnvironment::Development)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn configured_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::EnvFilter {
        value: level.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_accepts_directives() {
        assert!(configured_filter("info,lift_advisor=debug").is_ok());
    }

    #[test]
    fn configured_filter_reports_bad_level() {
        let err = configured_filter("lift_advisor=loud").expect_err("unknown level rejected");
        assert!(err.to_string().contains("lift_advisor=loud"));
    }
}
