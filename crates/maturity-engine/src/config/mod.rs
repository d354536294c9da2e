//! Environment-driven settings for binaries running the engine.
//!
//! The scoring functions never read the environment themselves; callers load an
//! [`AppConfig`] once and pass the relevant parts down explicitly.

use std::env;
use std::fmt;

use crate::scoring::PolicyId;

/// Deployment stage, used to label logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    /// Unknown names fall back to development.
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "testing" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Read `.env` (if present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = optional_var("APP_ENV")
            .map(|raw| AppEnvironment::parse(&raw))
            .unwrap_or(AppEnvironment::Development);

        let include_recommendations = match optional_var("MATURITY_RECOMMENDATIONS") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "MATURITY_RECOMMENDATIONS",
                value: raw,
            })?,
            None => true,
        };

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                policy_id: optional_var("MATURITY_POLICY_ID").map(PolicyId),
                include_recommendations,
            },
            telemetry: TelemetryConfig {
                log_level: optional_var("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                engine_log_level: optional_var("MATURITY_ENGINE_LOG"),
            },
        })
    }
}

/// Caller-side scoring defaults.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Explicit policy for every run; `None` means the registry default.
    pub policy_id: Option<PolicyId>,
    pub include_recommendations: bool,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Extra level applied only to engine events (`maturity_engine=<level>`).
    pub engine_log_level: Option<String>,
}

/// Trimmed value of `name`; blank counts as unset.
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{} must be true or false, found '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
