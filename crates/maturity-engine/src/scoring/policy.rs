//! Scoring policy: the immutable rule set describing how scores flow upward.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ScoringError;

const MAX_ROUNDING_PRECISION: u32 = 12;

/// Identifier wrapper for scoring policies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(pub String);

impl PolicyId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a topic combines its metric scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicMethod {
    Average,
    WeightedAverage,
    PercentageToScale,
}

impl TopicMethod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Average => "AVERAGE",
            Self::WeightedAverage => "WEIGHTED_AVERAGE",
            Self::PercentageToScale => "PERCENTAGE_TO_SCALE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_method(raw).as_str() {
            "AVERAGE" => Some(Self::Average),
            "WEIGHTED_AVERAGE" => Some(Self::WeightedAverage),
            "PERCENTAGE_TO_SCALE" => Some(Self::PercentageToScale),
            _ => None,
        }
    }
}

/// How pillars combine topics, and how the overall score combines pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationMethod {
    Average,
    WeightedAverage,
}

impl AggregationMethod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Average => "AVERAGE",
            Self::WeightedAverage => "WEIGHTED_AVERAGE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_method(raw).as_str() {
            "AVERAGE" => Some(Self::Average),
            "WEIGHTED_AVERAGE" => Some(Self::WeightedAverage),
            _ => None,
        }
    }
}

fn normalize_method(raw: &str) -> String {
    raw.trim().replace('-', "_").to_ascii_uppercase()
}

/// Validated scoring policy. Construct from a [`PolicyRecord`] or use
/// [`ScoringPolicy::standard`]; deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolicyRecord", into = "PolicyRecord")]
pub struct ScoringPolicy {
    pub id: PolicyId,
    pub name: String,
    pub version: u32,
    pub metric_answered_value: f64,
    pub metric_unanswered_value: f64,
    pub metric_max_level: u32,
    pub topic_method: TopicMethod,
    pub topic_scale_min: f64,
    pub topic_scale_max: f64,
    pub topic_exclude_empty: bool,
    pub pillar_method: AggregationMethod,
    pub pillar_exclude_empty: bool,
    pub pillar_min_topics: u32,
    pub overall_method: AggregationMethod,
    pub overall_exclude_empty: bool,
    pub overall_min_pillars: u32,
    pub rounding_precision: u32,
    /// Carried for record fidelity; no aggregation stage reads it yet.
    pub penalize_incomplete: bool,
    pub is_default: bool,
    pub is_active: bool,
}

impl ScoringPolicy {
    /// Baseline policy: answered metrics score their level, weighted averages
    /// at every stage, empty nodes excluded, two-digit rounding.
    pub fn standard() -> Self {
        Self {
            id: PolicyId::new("standard"),
            name: "Standard".to_string(),
            version: 1,
            metric_answered_value: 1.0,
            metric_unanswered_value: 0.0,
            metric_max_level: 5,
            topic_method: TopicMethod::WeightedAverage,
            topic_scale_min: 0.0,
            topic_scale_max: 5.0,
            topic_exclude_empty: true,
            pillar_method: AggregationMethod::WeightedAverage,
            pillar_exclude_empty: true,
            pillar_min_topics: 1,
            overall_method: AggregationMethod::WeightedAverage,
            overall_exclude_empty: true,
            overall_min_pillars: 1,
            rounding_precision: 2,
            penalize_incomplete: false,
            is_default: true,
            is_active: true,
        }
    }

    /// An answered value of exactly one means "score the metric at its own level".
    pub fn uses_metric_level(&self) -> bool {
        self.metric_answered_value == 1.0
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Policy as stored by the administration layer; method fields are free text
/// until validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub id: String,
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_answered_value")]
    pub metric_answered_value: f64,
    #[serde(default)]
    pub metric_unanswered_value: f64,
    #[serde(default = "default_max_level")]
    pub metric_max_level: u32,
    pub topic_method: String,
    #[serde(default)]
    pub topic_scale_min: f64,
    #[serde(default = "default_scale_max")]
    pub topic_scale_max: f64,
    #[serde(default = "default_true")]
    pub topic_exclude_empty: bool,
    pub pillar_method: String,
    #[serde(default = "default_true")]
    pub pillar_exclude_empty: bool,
    #[serde(default = "default_min_count")]
    pub pillar_min_topics: u32,
    pub overall_method: String,
    #[serde(default = "default_true")]
    pub overall_exclude_empty: bool,
    #[serde(default = "default_min_count")]
    pub overall_min_pillars: u32,
    #[serde(default = "default_precision")]
    pub rounding_precision: u32,
    #[serde(default)]
    pub penalize_incomplete: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl TryFrom<PolicyRecord> for ScoringPolicy {
    type Error = ScoringError;

    fn try_from(record: PolicyRecord) -> Result<Self, Self::Error> {
        let topic_method =
            TopicMethod::parse(&record.topic_method).ok_or(ScoringError::InvalidPolicy {
                field: "topic_method",
                value: record.topic_method.clone(),
            })?;
        let pillar_method = AggregationMethod::parse(&record.pillar_method).ok_or(
            ScoringError::InvalidPolicy {
                field: "pillar_method",
                value: record.pillar_method.clone(),
            },
        )?;
        let overall_method = AggregationMethod::parse(&record.overall_method).ok_or(
            ScoringError::InvalidPolicy {
                field: "overall_method",
                value: record.overall_method.clone(),
            },
        )?;

        ensure_finite("metric_answered_value", record.metric_answered_value)?;
        ensure_finite("metric_unanswered_value", record.metric_unanswered_value)?;
        ensure_finite("topic_scale_min", record.topic_scale_min)?;
        ensure_finite("topic_scale_max", record.topic_scale_max)?;

        if record.topic_scale_max < record.topic_scale_min {
            return Err(ScoringError::InvalidScale {
                min: record.topic_scale_min,
                max: record.topic_scale_max,
            });
        }

        if record.rounding_precision > MAX_ROUNDING_PRECISION {
            return Err(ScoringError::InvalidPolicyValue {
                field: "rounding_precision",
            });
        }

        Ok(Self {
            id: PolicyId(record.id),
            name: record.name,
            version: record.version,
            metric_answered_value: record.metric_answered_value,
            metric_unanswered_value: record.metric_unanswered_value,
            metric_max_level: record.metric_max_level,
            topic_method,
            topic_scale_min: record.topic_scale_min,
            topic_scale_max: record.topic_scale_max,
            topic_exclude_empty: record.topic_exclude_empty,
            pillar_method,
            pillar_exclude_empty: record.pillar_exclude_empty,
            pillar_min_topics: record.pillar_min_topics,
            overall_method,
            overall_exclude_empty: record.overall_exclude_empty,
            overall_min_pillars: record.overall_min_pillars,
            rounding_precision: record.rounding_precision,
            penalize_incomplete: record.penalize_incomplete,
            is_default: record.is_default,
            is_active: record.is_active,
        })
    }
}

impl From<ScoringPolicy> for PolicyRecord {
    fn from(policy: ScoringPolicy) -> Self {
        Self {
            id: policy.id.0,
            name: policy.name,
            version: policy.version,
            metric_answered_value: policy.metric_answered_value,
            metric_unanswered_value: policy.metric_unanswered_value,
            metric_max_level: policy.metric_max_level,
            topic_method: policy.topic_method.label().to_string(),
            topic_scale_min: policy.topic_scale_min,
            topic_scale_max: policy.topic_scale_max,
            topic_exclude_empty: policy.topic_exclude_empty,
            pillar_method: policy.pillar_method.label().to_string(),
            pillar_exclude_empty: policy.pillar_exclude_empty,
            pillar_min_topics: policy.pillar_min_topics,
            overall_method: policy.overall_method.label().to_string(),
            overall_exclude_empty: policy.overall_exclude_empty,
            overall_min_pillars: policy.overall_min_pillars,
            rounding_precision: policy.rounding_precision,
            penalize_incomplete: policy.penalize_incomplete,
            is_default: policy.is_default,
            is_active: policy.is_active,
        }
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), ScoringError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScoringError::InvalidPolicyValue { field })
    }
}

fn default_version() -> u32 {
    1
}

fn default_answered_value() -> f64 {
    1.0
}

fn default_max_level() -> u32 {
    5
}

fn default_scale_max() -> f64 {
    5.0
}

fn default_true() -> bool {
    true
}

fn default_min_count() -> u32 {
    1
}

fn default_precision() -> u32 {
    2
}
