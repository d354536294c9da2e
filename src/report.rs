use chrono::{DateTime, Utc};
use maturity_engine::error::AppError;
use maturity_engine::maturity::{MaturityLevel, MaturityLevelView};
use maturity_engine::scoring::AssessmentScore;
use serde::Serialize;

/// Where the scored answers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Recorded,
    WhatIf,
    Sample,
}

impl AnswerSource {
    const fn label(self) -> &'static str {
        match self {
            Self::Recorded => "recorded session answers",
            Self::WhatIf => "what-if projection over recorded answers",
            Self::Sample => "built-in sample assessment",
        }
    }
}

/// Calculation output stamped for display; the score itself carries no clock.
#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    pub calculated_at: DateTime<Utc>,
    pub answer_source: AnswerSource,
    #[serde(flatten)]
    pub score: &'a AssessmentScore,
}

impl<'a> ScoreReport<'a> {
    pub fn new(
        score: &'a AssessmentScore,
        answer_source: AnswerSource,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            calculated_at,
            answer_source,
            score,
        }
    }
}

pub fn print_score(report: &ScoreReport<'_>, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for line in score_lines(report) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn print_levels(json: bool) -> Result<(), AppError> {
    let levels: Vec<MaturityLevelView> = MaturityLevel::all()
        .into_iter()
        .map(MaturityLevel::view)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&levels)?);
    } else {
        for line in level_lines(&levels) {
            println!("{line}");
        }
    }
    Ok(())
}

fn score_lines(report: &ScoreReport<'_>) -> Vec<String> {
    let score = report.score;
    let overall = &score.overall;
    let mut lines = vec![
        "Maturity assessment report".to_string(),
        format!(
            "Calculated {} with policy {} v{} ({})",
            report.calculated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            score.policy_id,
            score.policy_version,
            score.algorithm_version
        ),
        format!("Answers: {}", report.answer_source.label()),
        String::new(),
        format!(
            "Overall score: {:.2} / 5 ({}), confidence {:.0}%",
            overall.score,
            overall.maturity_level.name(),
            overall.confidence * 100.0
        ),
        format!(
            "Progress: {}/{} metrics answered ({:.1}%), {} answered pillars",
            score.progress.answered_metrics,
            score.progress.total_metrics,
            score.progress.completion_percentage,
            overall.answered_pillars
        ),
    ];

    lines.push(String::new());
    lines.push("Pillars".to_string());
    for pillar in &score.pillars {
        lines.push(format!(
            "- {}: {:.2} ({}), {}/{} topics answered",
            pillar.name,
            pillar.score,
            pillar.maturity_level.name(),
            pillar.answered_topics,
            pillar.total_topics
        ));
        for topic in &pillar.topics {
            lines.push(format!(
                "    {}: {:.2}, {}/{} metrics answered",
                topic.name, topic.score, topic.answered_count, topic.total_count
            ));
        }
    }

    if overall.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings: none".to_string());
    } else {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        lines.extend(overall.warnings.iter().map(|warning| format!("- {warning}")));
    }

    if !score.recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Recommendations".to_string());
        for recommendation in &score.recommendations {
            lines.push(format!(
                "- [{}] {} ({} -> {})",
                recommendation.priority.label(),
                recommendation.title,
                recommendation.current_level.name(),
                recommendation.target_level.name()
            ));
            lines.extend(
                recommendation
                    .actions
                    .iter()
                    .map(|action| format!("    * {action}")),
            );
        }
    }

    lines
}

fn level_lines(levels: &[MaturityLevelView]) -> Vec<String> {
    levels
        .iter()
        .map(|view| {
            let upper = if view.level == 5 { ']' } else { ')' };
            format!(
                "{} {:<10} [{:.1}, {:.1}{} {}",
                view.level, view.name, view.min_score, view.max_score, upper, view.color
            )
        })
        .collect()
}
