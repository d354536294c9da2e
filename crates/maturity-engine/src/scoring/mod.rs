//! Hierarchical scoring: metric answers roll up through topics and pillars into
//! one overall maturity score.

mod error;
mod math;
mod policy;
mod progress;
mod registry;
mod rollup;
mod rules;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
pub use math::round_half_away;
pub use policy::{AggregationMethod, PolicyId, PolicyRecord, ScoringPolicy, TopicMethod};
pub use progress::{AssessmentProgress, PillarProgress};
pub use registry::PolicyRegistry;
pub use rollup::{aggregate_overall, aggregate_pillar};
pub use rules::{aggregate_topic, resolve_metric};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::assessment::{AssessmentTree, MetricId, PillarId, RawAnswers, TopicId};
use crate::maturity::MaturityLevel;
use crate::recommendations::{recommend, Recommendation};
use progress::summarize_progress;

/// Stamped on every calculation record next to the policy version.
pub const ALGORITHM_VERSION: &str = "hierarchical-v2";

/// Stateless engine applying one scoring policy to assessment sessions.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Resolve the session's policy from the registry before any scoring starts.
    pub fn from_registry(
        registry: &PolicyRegistry,
        explicit: Option<&PolicyId>,
    ) -> Result<Self, ScoringError> {
        let policy = registry.resolve(explicit)?;
        Ok(Self::new(policy.clone()))
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn calculate(&self, tree: &AssessmentTree, answers: &RawAnswers) -> AssessmentScore {
        self.calculate_with(tree, answers, CalculationOptions::default())
    }

    pub fn calculate_with(
        &self,
        tree: &AssessmentTree,
        answers: &RawAnswers,
        options: CalculationOptions,
    ) -> AssessmentScore {
        let policy = &self.policy;

        let pillars: Vec<PillarScore> = tree
            .pillars
            .iter()
            .map(|pillar| {
                let topics = pillar
                    .topics
                    .iter()
                    .map(|topic| {
                        let metrics = topic
                            .metrics
                            .iter()
                            .filter_map(|metric| {
                                resolve_metric(metric, answers.value_for(&metric.id), policy)
                            })
                            .collect();
                        aggregate_topic(topic, metrics, policy)
                    })
                    .collect();
                aggregate_pillar(pillar, topics, policy)
            })
            .collect();

        let overall = aggregate_overall(&pillars, policy);
        let progress = summarize_progress(&pillars);
        let recommendations = if options.include_recommendations {
            recommend(&pillars)
        } else {
            Vec::new()
        };

        debug!(
            recommendations = recommendations.len(),
            warnings = overall.warnings.len(),
            "assessment rolled up"
        );
        info!(
            policy = %policy.id,
            score = overall.score,
            level = overall.maturity_level.name(),
            confidence = overall.confidence,
            "maturity score calculated"
        );

        AssessmentScore {
            policy_id: policy.id.clone(),
            policy_version: policy.version,
            algorithm_version: ALGORITHM_VERSION.to_string(),
            overall,
            pillars,
            progress,
            recommendations,
        }
    }
}

/// Toggles for optional pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationOptions {
    pub include_recommendations: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            include_recommendations: true,
        }
    }
}

/// Resolved score for one active metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric_id: MetricId,
    pub score: f64,
    pub answered: bool,
    pub weight: f64,
}

/// Aggregated topic score with its completion counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic_id: TopicId,
    pub name: String,
    pub score: f64,
    pub answered_count: usize,
    pub total_count: usize,
    pub weight: f64,
    pub metrics: Vec<MetricScore>,
}

/// Aggregated pillar score, classified on its own value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    pub pillar_id: PillarId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub score: f64,
    pub maturity_level: MaturityLevel,
    pub weight: f64,
    pub answered_topics: usize,
    pub total_topics: usize,
    pub topics: Vec<TopicScore>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Final rounded score plus the trust signals a caller should surface with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    pub score: f64,
    pub maturity_level: MaturityLevel,
    /// Answered over total active metrics; a completion ratio, not a statistic.
    pub confidence: f64,
    pub answered_pillars: usize,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Complete calculation record for one session, ready for the caller to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub policy_id: PolicyId,
    pub policy_version: u32,
    pub algorithm_version: String,
    pub overall: OverallResult,
    pub pillars: Vec<PillarScore>,
    pub progress: AssessmentProgress,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,
}
