/// Fatal scoring failures. Raised before any result is assembled.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("no scoring policy could be resolved: {0}")]
    Configuration(String),
    #[error("policy field `{field}` has unrecognized value '{value}'")]
    InvalidPolicy { field: &'static str, value: String },
    #[error("policy topic scale is inverted (min {min}, max {max})")]
    InvalidScale { min: f64, max: f64 },
    #[error("policy field `{field}` is out of range")]
    InvalidPolicyValue { field: &'static str },
}
