use tracing::{debug, warn};

use super::math::{mean, ratio, round_half_away, weighted_mean};
use super::policy::{AggregationMethod, ScoringPolicy};
use super::{OverallResult, PillarScore, TopicScore};
use crate::assessment::Pillar;
use crate::maturity::classify;

/// Combine a pillar's topic scores. Missing coverage produces a warning but the
/// pillar is still scored from whatever topics qualify.
pub fn aggregate_pillar(
    pillar: &Pillar,
    topic_scores: Vec<TopicScore>,
    policy: &ScoringPolicy,
) -> PillarScore {
    let total_topics = topic_scores.len();
    let answered_topics = topic_scores
        .iter()
        .filter(|topic| topic.answered_count > 0)
        .count();

    let mut warnings = Vec::new();
    if answered_topics < policy.pillar_min_topics as usize {
        let message = format!(
            "Pillar {} has {} answered topics, minimum required: {}",
            pillar.name, answered_topics, policy.pillar_min_topics
        );
        warn!(pillar = %pillar.id, "{message}");
        warnings.push(message);
    }

    let score = if policy.pillar_exclude_empty && answered_topics == 0 {
        0.0
    } else {
        let selected = topic_scores
            .iter()
            .filter(|topic| topic.answered_count > 0 || !policy.pillar_exclude_empty)
            .map(|topic| (topic.score, topic.weight));
        combine(policy.pillar_method, selected).max(0.0)
    };

    let maturity_level = classify(score);

    debug!(
        pillar = %pillar.id,
        score,
        answered_topics,
        total_topics,
        level = maturity_level.name(),
        "pillar aggregated"
    );

    PillarScore {
        pillar_id: pillar.id.clone(),
        name: pillar.name.clone(),
        category: pillar.category.clone(),
        score,
        maturity_level,
        weight: pillar.weight,
        answered_topics,
        total_topics,
        topics: topic_scores,
        warnings,
    }
}

/// Combine pillar scores into the rounded overall score and completion ratio.
pub fn aggregate_overall(pillar_scores: &[PillarScore], policy: &ScoringPolicy) -> OverallResult {
    let answered_pillars = pillar_scores
        .iter()
        .filter(|pillar| pillar.answered_topics > 0)
        .count();

    let mut warnings: Vec<String> = pillar_scores
        .iter()
        .flat_map(|pillar| pillar.warnings.iter().cloned())
        .collect();

    if answered_pillars < policy.overall_min_pillars as usize {
        let message = format!(
            "Assessment has {} answered pillars, minimum required: {}",
            answered_pillars, policy.overall_min_pillars
        );
        warn!("{message}");
        warnings.push(message);
    }

    let selected = pillar_scores
        .iter()
        .filter(|pillar| pillar.answered_topics > 0 || !policy.overall_exclude_empty)
        .map(|pillar| (pillar.score, pillar.weight));
    // TODO: apply `penalize_incomplete` once the policy owners define how the
    // completion ratio should scale the overall score; today the flag is inert.
    let raw = combine(policy.overall_method, selected).max(0.0);
    let score = round_half_away(raw, policy.rounding_precision);

    let (answered_metrics, total_metrics) = pillar_scores
        .iter()
        .flat_map(|pillar| pillar.topics.iter())
        .fold((0, 0), |(answered, total), topic| {
            (answered + topic.answered_count, total + topic.total_count)
        });

    OverallResult {
        score,
        maturity_level: classify(score),
        confidence: ratio(answered_metrics, total_metrics),
        answered_pillars,
        warnings,
    }
}

fn combine<I>(method: AggregationMethod, scored: I) -> f64
where
    I: Iterator<Item = (f64, f64)>,
{
    match method {
        AggregationMethod::Average => mean(scored.map(|(score, _)| score)),
        AggregationMethod::WeightedAverage => weighted_mean(scored),
    }
}
