//! Improvement recommendations derived from pillar scores.

mod catalog;

use serde::{Deserialize, Serialize};

use crate::assessment::PillarId;
use crate::maturity::{classify, MaturityLevel};
use crate::scoring::PillarScore;

const HIGH_PRIORITY_BELOW: f64 = 2.5;
const MEDIUM_PRIORITY_BELOW: f64 = 3.5;
const LOW_PRIORITY_BELOW: f64 = 4.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    fn for_score(score: f64) -> Option<Self> {
        if score < HIGH_PRIORITY_BELOW {
            Some(Self::High)
        } else if score < MEDIUM_PRIORITY_BELOW {
            Some(Self::Medium)
        } else if score < LOW_PRIORITY_BELOW {
            Some(Self::Low)
        } else {
            None
        }
    }
}

/// Prioritized improvement action for one pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub pillar_id: PillarId,
    pub pillar_name: String,
    pub priority: Priority,
    pub current_score: f64,
    pub current_level: MaturityLevel,
    pub target_level: MaturityLevel,
    pub title: String,
    pub actions: Vec<String>,
}

/// Build recommendations for every pillar below the top tier, highest priority
/// first; pillars sharing a priority keep their input order.
pub fn recommend(pillar_scores: &[PillarScore]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = pillar_scores
        .iter()
        .filter_map(|pillar| {
            let priority = Priority::for_score(pillar.score)?;
            let current_level = classify(pillar.score);
            let category = pillar.category.as_deref().unwrap_or(&pillar.name);

            let title = match priority {
                Priority::High => format!("Critical improvement needed in {}", pillar.name),
                Priority::Medium => format!("Strengthen {} practices", pillar.name),
                Priority::Low => format!("Optimize {} toward leading practice", pillar.name),
            };

            Some(Recommendation {
                pillar_id: pillar.pillar_id.clone(),
                pillar_name: pillar.name.clone(),
                priority,
                current_score: pillar.score,
                current_level,
                target_level: current_level.next().unwrap_or(current_level),
                title,
                actions: catalog::actions_for(category, priority)
                    .iter()
                    .map(|action| action.to_string())
                    .collect(),
            })
        })
        .collect();

    recommendations.sort_by_key(|recommendation| recommendation.priority.rank());
    recommendations
}
