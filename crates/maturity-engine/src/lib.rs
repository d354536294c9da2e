pub mod assessment;
pub mod config;
pub mod error;
pub mod maturity;
pub mod recommendations;
pub mod scoring;
pub mod telemetry;

pub use assessment::{AssessmentTree, Metric, Pillar, RawAnswers, Topic};
pub use maturity::{classify, MaturityLevel};
pub use recommendations::{recommend, Priority, Recommendation};
pub use scoring::{
    aggregate_overall, aggregate_pillar, aggregate_topic, resolve_metric, AssessmentScore,
    PolicyRegistry, ScoringEngine, ScoringError, ScoringPolicy,
};
