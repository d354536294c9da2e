//! Built-in sample assessment used by `maturity demo`.

use maturity_engine::assessment::{AssessmentTree, Metric, Pillar, RawAnswers, Topic};
use maturity_engine::scoring::ScoringPolicy;

pub fn policy() -> ScoringPolicy {
    ScoringPolicy::standard()
}

pub fn tree() -> AssessmentTree {
    AssessmentTree::new(vec![
        Pillar::new("security", "Security")
            .with_category("security")
            .with_weight(1.5)
            .with_topic(
                Topic::new("security-identity", "Identity and Access")
                    .with_metric(Metric::new("sec-mfa", 2))
                    .with_metric(Metric::new("sec-sso", 3))
                    .with_metric(Metric::new("sec-pam", 4).with_weight(2.0)),
            )
            .with_topic(
                Topic::new("security-detection", "Threat Detection")
                    .with_metric(Metric::new("sec-siem", 3))
                    .with_metric(Metric::new("sec-soc", 5))
                    .with_metric(Metric::new("sec-ids", 2).inactive()),
            ),
        Pillar::new("reliability", "Reliability")
            .with_category("reliability")
            .with_topic(
                Topic::new("reliability-recovery", "Backup and Recovery")
                    .with_metric(Metric::new("rel-backup", 2))
                    .with_metric(Metric::new("rel-dr-test", 4)),
            )
            .with_topic(
                Topic::new("reliability-observability", "Observability")
                    .with_weight(0.5)
                    .with_metric(Metric::new("rel-slo", 3)),
            ),
        Pillar::new("governance", "Governance")
            .with_category("governance")
            .with_topic(
                Topic::new("governance-standards", "Architecture Standards")
                    .with_metric(Metric::new("gov-review-board", 3))
                    .with_metric(Metric::new("gov-tech-radar", 4)),
            ),
        Pillar::new("cost", "Cost Optimization")
            .with_category("cost optimization")
            .with_weight(0.5)
            .with_topic(
                Topic::new("cost-visibility", "Spend Visibility")
                    .with_metric(Metric::new("cost-tagging", 2))
                    .with_metric(Metric::new("cost-showback", 3)),
            ),
    ])
}

/// Partially completed session; nothing under cost optimization is answered.
pub fn answers() -> RawAnswers {
    RawAnswers::new()
        .answer("sec-mfa", 1.0)
        .answer("sec-sso", 1.0)
        .answer("sec-pam", 1.0)
        .answer("sec-siem", 1.0)
        .answer("rel-backup", 1.0)
        .answer("rel-dr-test", 1.0)
        .answer("gov-review-board", 1.0)
}
