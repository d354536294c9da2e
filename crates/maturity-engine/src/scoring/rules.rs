use tracing::trace;

use super::math::{clamp_between, mean, weighted_mean};
use super::policy::{ScoringPolicy, TopicMethod};
use super::{MetricScore, TopicScore};
use crate::assessment::{Metric, Topic};

/// Score one metric answer. Inactive metrics yield `None` and take no part in
/// any aggregation.
pub fn resolve_metric(
    metric: &Metric,
    raw_value: Option<f64>,
    policy: &ScoringPolicy,
) -> Option<MetricScore> {
    if !metric.active {
        return None;
    }

    let answered = raw_value.is_some();
    let score = if !answered {
        policy.metric_unanswered_value
    } else if policy.uses_metric_level() {
        metric.level.min(policy.metric_max_level) as f64
    } else {
        policy.metric_answered_value
    };

    Some(MetricScore {
        metric_id: metric.id.clone(),
        score,
        answered,
        weight: metric.weight,
    })
}

/// Combine a topic's active metric scores under the policy's topic method.
pub fn aggregate_topic(
    topic: &Topic,
    metric_scores: Vec<MetricScore>,
    policy: &ScoringPolicy,
) -> TopicScore {
    let total_count = metric_scores.len();
    let answered_count = metric_scores.iter().filter(|metric| metric.answered).count();

    let score = if policy.topic_exclude_empty && answered_count == 0 {
        0.0
    } else {
        let included: Vec<&MetricScore> = metric_scores
            .iter()
            .filter(|metric| metric.answered || !policy.topic_exclude_empty)
            .collect();

        let raw = match policy.topic_method {
            TopicMethod::Average => mean(included.iter().map(|metric| metric.score)),
            TopicMethod::WeightedAverage => weighted_mean(
                included
                    .iter()
                    .map(|metric| (metric.score, metric.weight)),
            ),
            TopicMethod::PercentageToScale => percentage_to_scale(&metric_scores, policy),
        };

        clamp_between(raw, 0.0, policy.topic_scale_max)
    };

    trace!(
        topic = %topic.id,
        score,
        answered_count,
        total_count,
        "topic aggregated"
    );

    TopicScore {
        topic_id: topic.id.clone(),
        name: topic.name.clone(),
        score,
        answered_count,
        total_count,
        weight: topic.weight,
        metrics: metric_scores,
    }
}

/// Share of the best achievable score, over every active metric, mapped onto
/// the policy's topic scale.
fn percentage_to_scale(metric_scores: &[MetricScore], policy: &ScoringPolicy) -> f64 {
    let best = if policy.uses_metric_level() {
        policy.metric_max_level as f64
    } else {
        policy.metric_answered_value
    };
    if metric_scores.is_empty() || best <= 0.0 {
        return 0.0;
    }

    let achieved: f64 = metric_scores.iter().map(|metric| metric.score).sum();
    let percentage = achieved / (metric_scores.len() as f64 * best);
    policy.topic_scale_min + percentage * (policy.topic_scale_max - policy.topic_scale_min)
}
