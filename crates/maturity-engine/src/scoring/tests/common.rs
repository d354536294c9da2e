use crate::assessment::{AssessmentTree, Metric, MetricId, Pillar, PillarId, Topic, TopicId};
use crate::maturity::classify;
use crate::scoring::{
    AggregationMethod, MetricScore, PillarScore, PolicyRecord, ScoringPolicy, TopicMethod,
    TopicScore,
};

pub(super) fn standard_policy() -> ScoringPolicy {
    ScoringPolicy::standard()
}

/// Every stage includes unanswered nodes in its arithmetic.
pub(super) fn inclusive_policy() -> ScoringPolicy {
    ScoringPolicy {
        topic_exclude_empty: false,
        pillar_exclude_empty: false,
        overall_exclude_empty: false,
        ..ScoringPolicy::standard()
    }
}

pub(super) fn average_policy() -> ScoringPolicy {
    ScoringPolicy {
        topic_method: TopicMethod::Average,
        pillar_method: AggregationMethod::Average,
        overall_method: AggregationMethod::Average,
        ..ScoringPolicy::standard()
    }
}

pub(super) fn percentage_policy(exclude_empty: bool) -> ScoringPolicy {
    ScoringPolicy {
        topic_method: TopicMethod::PercentageToScale,
        topic_exclude_empty: exclude_empty,
        ..ScoringPolicy::standard()
    }
}

pub(super) fn policy_record(id: &str) -> PolicyRecord {
    PolicyRecord {
        id: id.to_string(),
        name: format!("Policy {id}"),
        version: 1,
        metric_answered_value: 1.0,
        metric_unanswered_value: 0.0,
        metric_max_level: 5,
        topic_method: "WEIGHTED_AVERAGE".to_string(),
        topic_scale_min: 0.0,
        topic_scale_max: 5.0,
        topic_exclude_empty: true,
        pillar_method: "WEIGHTED_AVERAGE".to_string(),
        pillar_exclude_empty: true,
        pillar_min_topics: 1,
        overall_method: "AVERAGE".to_string(),
        overall_exclude_empty: true,
        overall_min_pillars: 1,
        rounding_precision: 2,
        penalize_incomplete: false,
        is_default: false,
        is_active: true,
    }
}

pub(super) fn metric_score(id: &str, score: f64, answered: bool, weight: f64) -> MetricScore {
    MetricScore {
        metric_id: MetricId::new(id),
        score,
        answered,
        weight,
    }
}

pub(super) fn topic_score(id: &str, score: f64, answered: usize, total: usize, weight: f64) -> TopicScore {
    TopicScore {
        topic_id: TopicId::new(id),
        name: format!("Topic {id}"),
        score,
        answered_count: answered,
        total_count: total,
        weight,
        metrics: Vec::new(),
    }
}

pub(super) fn pillar_score(id: &str, score: f64, topics: Vec<TopicScore>, weight: f64) -> PillarScore {
    let answered_topics = topics.iter().filter(|topic| topic.answered_count > 0).count();
    PillarScore {
        pillar_id: PillarId::new(id),
        name: format!("Pillar {id}"),
        category: None,
        score,
        maturity_level: classify(score),
        weight,
        answered_topics,
        total_topics: topics.len(),
        topics,
        warnings: Vec::new(),
    }
}

pub(super) fn topic(id: &str) -> Topic {
    Topic::new(id, format!("Topic {id}"))
}

/// One pillar, one topic, metric `a` at level 2 and metric `b` at level 4.
pub(super) fn single_pillar_tree() -> AssessmentTree {
    AssessmentTree::new(vec![Pillar::new("security", "Security")
        .with_category("security")
        .with_topic(
            topic("identity")
                .with_metric(Metric::new("a", 2))
                .with_metric(Metric::new("b", 4)),
        )])
}

/// Two pillars with mixed weights plus an inactive metric that must be ignored.
pub(super) fn two_pillar_tree() -> AssessmentTree {
    AssessmentTree::new(vec![
        Pillar::new("security", "Security")
            .with_category("security")
            .with_weight(2.0)
            .with_topic(
                topic("identity")
                    .with_metric(Metric::new("sec-1", 3))
                    .with_metric(Metric::new("sec-2", 5).with_weight(3.0))
                    .with_metric(Metric::new("sec-retired", 1).inactive()),
            )
            .with_topic(topic("network").with_metric(Metric::new("sec-3", 2))),
        Pillar::new("reliability", "Reliability")
            .with_category("reliability")
            .with_topic(
                topic("recovery")
                    .with_metric(Metric::new("rel-1", 4))
                    .with_metric(Metric::new("rel-2", 4)),
            ),
    ])
}
