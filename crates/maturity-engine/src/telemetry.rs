//! Tracing setup for binaries embedding the engine.
//!
//! The engine only emits events; installing a subscriber is the caller's job.

use std::fmt;

use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

const ENGINE_TARGET: &str = "maturity_engine";

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directive: String, source: ParseError },
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directive, .. } => {
                write!(f, "log filter '{}' could not be parsed", directive)
            }
            TelemetryError::Install(err) => {
                write!(f, "tracing subscriber could not be installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

/// `RUST_LOG` replaces the configured level entirely; the engine override is
/// layered on top of whichever base filter wins.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let base = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|source| {
            TelemetryError::Filter {
                directive: config.log_level.clone(),
                source,
            }
        })?,
    };

    match &config.engine_log_level {
        Some(level) => {
            let raw = format!("{ENGINE_TARGET}={level}");
            let directive = raw
                .parse::<Directive>()
                .map_err(|source| TelemetryError::Filter {
                    directive: raw.clone(),
                    source,
                })?;
            Ok(base.add_directive(directive))
        }
        None => Ok(base),
    }
}

/// Install a compact stderr subscriber so stdout stays free for JSON reports.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}
