use serde::{Deserialize, Serialize};

use super::math::percentage;
use super::PillarScore;
use crate::assessment::PillarId;

/// Completion statistics over active metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentProgress {
    pub total_metrics: usize,
    pub answered_metrics: usize,
    pub remaining_metrics: usize,
    pub completion_percentage: f64,
    pub pillars: Vec<PillarProgress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarProgress {
    pub pillar_id: PillarId,
    pub pillar_name: String,
    pub answered: usize,
    pub total: usize,
    pub completion_percentage: f64,
}

pub(crate) fn summarize_progress(pillar_scores: &[PillarScore]) -> AssessmentProgress {
    let pillars: Vec<PillarProgress> = pillar_scores
        .iter()
        .map(|pillar| {
            let (answered, total) = pillar.topics.iter().fold((0, 0), |(answered, total), topic| {
                (answered + topic.answered_count, total + topic.total_count)
            });
            PillarProgress {
                pillar_id: pillar.pillar_id.clone(),
                pillar_name: pillar.name.clone(),
                answered,
                total,
                completion_percentage: percentage(answered, total),
            }
        })
        .collect();

    let answered_metrics: usize = pillars.iter().map(|entry| entry.answered).sum();
    let total_metrics: usize = pillars.iter().map(|entry| entry.total).sum();

    AssessmentProgress {
        total_metrics,
        answered_metrics,
        remaining_metrics: total_metrics - answered_metrics,
        completion_percentage: percentage(answered_metrics, total_metrics),
        pillars,
    }
}
