use super::common::*;
use crate::assessment::{Metric, MetricId};
use crate::scoring::{resolve_metric, ScoringPolicy};

#[test]
fn answered_metric_scores_its_level_under_unit_answer_value() {
    let policy = standard_policy();
    let metric = Metric::new("m-1", 3);

    let score = resolve_metric(&metric, Some(1.0), &policy).expect("active metric scored");

    assert_eq!(score.metric_id, MetricId::new("m-1"));
    assert_eq!(score.score, 3.0);
    assert!(score.answered);
    assert_eq!(score.weight, 1.0);
}

#[test]
fn presence_of_an_answer_counts_even_when_the_value_is_zero() {
    let policy = standard_policy();
    let metric = Metric::new("m-1", 4);

    let score = resolve_metric(&metric, Some(0.0), &policy).expect("active metric scored");

    assert!(score.answered);
    assert_eq!(score.score, 4.0);
}

#[test]
fn fixed_answer_value_ignores_metric_level() {
    let policy = ScoringPolicy {
        metric_answered_value: 0.8,
        ..standard_policy()
    };

    let low = resolve_metric(&Metric::new("low", 1), Some(1.0), &policy).expect("scored");
    let high = resolve_metric(&Metric::new("high", 5), Some(1.0), &policy).expect("scored");

    assert_eq!(low.score, 0.8);
    assert_eq!(high.score, 0.8);
}

#[test]
fn unanswered_metric_takes_policy_unanswered_value() {
    let policy = ScoringPolicy {
        metric_unanswered_value: 0.25,
        ..standard_policy()
    };

    let score = resolve_metric(&Metric::new("m-1", 5), None, &policy).expect("scored");

    assert!(!score.answered);
    assert_eq!(score.score, 0.25);
}

#[test]
fn inactive_metric_is_omitted_rather_than_scored_zero() {
    let policy = standard_policy();
    let metric = Metric::new("retired", 3).inactive();

    assert!(resolve_metric(&metric, Some(1.0), &policy).is_none());
    assert!(resolve_metric(&metric, None, &policy).is_none());
}

#[test]
fn level_above_policy_ceiling_is_capped() {
    let policy = standard_policy();

    let score = resolve_metric(&Metric::new("m-1", 9), Some(1.0), &policy).expect("scored");

    assert_eq!(score.score, 5.0);
}

#[test]
fn metric_weight_is_carried_into_the_score() {
    let policy = standard_policy();
    let metric = Metric::new("m-1", 2).with_weight(2.5);

    let score = resolve_metric(&metric, Some(1.0), &policy).expect("scored");

    assert_eq!(score.weight, 2.5);
}

#[test]
fn negative_weight_is_sanitized_to_zero() {
    let metric = Metric::new("m-1", 2).with_weight(-3.0);
    assert_eq!(metric.weight, 0.0);

    let metric = Metric::new("m-2", 2).with_weight(f64::NAN);
    assert_eq!(metric.weight, 0.0);
}
