use super::common::*;
use crate::assessment::Metric;
use crate::maturity::{classify, MaturityLevel};
use crate::scoring::{aggregate_topic, resolve_metric, ScoringPolicy};

#[test]
fn weighted_average_uses_metric_weights() {
    let policy = standard_policy();
    let scores = vec![
        metric_score("a", 2.0, true, 1.0),
        metric_score("b", 4.0, true, 3.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 3.5);
    assert_eq!(result.answered_count, 2);
    assert_eq!(result.total_count, 2);
}

#[test]
fn plain_average_ignores_weights() {
    let policy = average_policy();
    let scores = vec![
        metric_score("a", 2.0, true, 1.0),
        metric_score("b", 4.0, true, 3.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 3.0);
}

#[test]
fn all_unanswered_topic_scores_zero_when_excluding_empty() {
    let policy = ScoringPolicy {
        metric_unanswered_value: 2.0,
        ..standard_policy()
    };
    let scores = vec![
        metric_score("a", 2.0, false, 1.0),
        metric_score("b", 2.0, false, 1.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 0.0);
    assert_eq!(result.answered_count, 0);
    assert_eq!(result.total_count, 2);
}

#[test]
fn excluding_empty_restricts_arithmetic_to_answered_metrics() {
    let policy = standard_policy();
    let scores = vec![
        metric_score("a", 2.0, true, 1.0),
        metric_score("b", 0.0, false, 1.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 2.0);
    assert_eq!(result.answered_count, 1);
    assert_eq!(result.total_count, 2);
}

#[test]
fn including_empty_averages_over_every_metric() {
    let policy = inclusive_policy();
    let scores = vec![
        metric_score("a", 2.0, true, 1.0),
        metric_score("b", 0.0, false, 1.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 1.0);
}

#[test]
fn zero_total_weight_degrades_to_zero() {
    let policy = standard_policy();
    let scores = vec![
        metric_score("a", 4.0, true, 0.0),
        metric_score("b", 3.0, true, 0.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 0.0);
    assert!(result.score.is_finite());
}

#[test]
fn topic_without_metrics_scores_zero() {
    let result = aggregate_topic(&topic("t"), Vec::new(), &inclusive_policy());

    assert_eq!(result.score, 0.0);
    assert_eq!(result.total_count, 0);
}

#[test]
fn percentage_to_scale_maps_full_marks_to_scale_max() {
    let policy = percentage_policy(false);
    let scores = vec![
        metric_score("a", 5.0, true, 1.0),
        metric_score("b", 5.0, true, 1.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 5.0);
}

#[test]
fn percentage_to_scale_maps_nothing_answered_to_zero() {
    for exclude_empty in [true, false] {
        let policy = percentage_policy(exclude_empty);
        let scores = vec![
            metric_score("a", 0.0, false, 1.0),
            metric_score("b", 0.0, false, 1.0),
        ];

        let result = aggregate_topic(&topic("t"), scores, &policy);

        assert_eq!(result.score, 0.0, "exclude_empty = {exclude_empty}");
    }
}

#[test]
fn percentage_to_scale_divides_by_every_metric() {
    let policy = percentage_policy(true);
    let scores = vec![
        metric_score("a", 5.0, true, 1.0),
        metric_score("b", 0.0, false, 1.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 2.5);
}

#[test]
fn percentage_to_scale_measures_against_the_highest_level() {
    let policy = percentage_policy(true);
    let node = (1..=5).fold(topic("t"), |node, index| {
        node.with_metric(Metric::new(format!("m-{index}"), 3))
    });
    let scores = node
        .metrics
        .iter()
        .enumerate()
        .filter_map(|(index, metric)| {
            let answer = if index < 2 { Some(1.0) } else { None };
            resolve_metric(metric, answer, &policy)
        })
        .collect();

    let result = aggregate_topic(&node, scores, &policy);

    // 2 answers at level 3 out of 5 metrics capped at level 5: 6 / 25 of the scale
    assert!((result.score - 1.2).abs() < 1e-9, "score = {}", result.score);
    assert_eq!(classify(result.score), MaturityLevel::Initial);
}

#[test]
fn percentage_to_scale_uses_fixed_reward_as_the_ceiling() {
    let policy = ScoringPolicy {
        metric_answered_value: 2.0,
        ..percentage_policy(false)
    };
    let scores = vec![
        metric_score("a", 2.0, true, 1.0),
        metric_score("b", 0.0, false, 1.0),
    ];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 2.5);
}

#[test]
fn percentage_to_scale_is_clamped_to_scale_max() {
    let policy = ScoringPolicy {
        metric_unanswered_value: 9.0,
        ..percentage_policy(false)
    };
    let scores = vec![metric_score("a", 9.0, false, 1.0)];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 5.0);
}

#[test]
fn negative_scores_are_clamped_to_zero() {
    let policy = ScoringPolicy {
        metric_unanswered_value: -2.0,
        ..inclusive_policy()
    };
    let scores = vec![metric_score("a", -2.0, false, 1.0)];

    let result = aggregate_topic(&topic("t"), scores, &policy);

    assert_eq!(result.score, 0.0);
}

#[test]
fn topic_weight_and_metrics_are_preserved() {
    let policy = standard_policy();
    let node = topic("t")
        .with_weight(2.0)
        .with_metric(Metric::new("a", 1));
    let scores = vec![metric_score("a", 1.0, true, 1.0)];

    let result = aggregate_topic(&node, scores.clone(), &policy);

    assert_eq!(result.weight, 2.0);
    assert_eq!(result.metrics, scores);
    assert_eq!(result.name, "Topic t");
}
