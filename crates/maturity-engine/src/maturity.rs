//! Maturity classification over the canonical 0-5 scale.

use serde::{Deserialize, Serialize};

/// Named maturity tier. Ranges are half-open `[min, max)` except the top tier,
/// which includes 5.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Initial,
    Developing,
    Defined,
    Managed,
    Optimized,
}

const TIERS: [(MaturityLevel, f64, f64); 5] = [
    (MaturityLevel::Initial, 0.0, 1.5),
    (MaturityLevel::Developing, 1.5, 2.5),
    (MaturityLevel::Defined, 2.5, 3.5),
    (MaturityLevel::Managed, 3.5, 4.5),
    (MaturityLevel::Optimized, 4.5, 5.0),
];

impl MaturityLevel {
    pub const fn all() -> [MaturityLevel; 5] {
        [
            Self::Initial,
            Self::Developing,
            Self::Defined,
            Self::Managed,
            Self::Optimized,
        ]
    }

    pub const fn level(self) -> u8 {
        match self {
            Self::Initial => 1,
            Self::Developing => 2,
            Self::Defined => 3,
            Self::Managed => 4,
            Self::Optimized => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Defined => "Defined",
            Self::Managed => "Managed",
            Self::Optimized => "Optimized",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Initial => "#dc2626",
            Self::Developing => "#ea580c",
            Self::Defined => "#ca8a04",
            Self::Managed => "#16a34a",
            Self::Optimized => "#2563eb",
        }
    }

    /// Inclusive lower and exclusive upper bound (inclusive for `Optimized`).
    pub fn range(self) -> (f64, f64) {
        let (_, min, max) = TIERS[(self.level() - 1) as usize];
        (min, max)
    }

    /// The tier immediately above, if any.
    pub const fn next(self) -> Option<MaturityLevel> {
        match self {
            Self::Initial => Some(Self::Developing),
            Self::Developing => Some(Self::Defined),
            Self::Defined => Some(Self::Managed),
            Self::Managed => Some(Self::Optimized),
            Self::Optimized => None,
        }
    }

    pub fn view(self) -> MaturityLevelView {
        let (min_score, max_score) = self.range();
        MaturityLevelView {
            level: self.level(),
            name: self.name(),
            color: self.color(),
            min_score,
            max_score,
        }
    }
}

/// Map a score onto its tier; scores outside the table clamp to the nearest end.
pub fn classify(score: f64) -> MaturityLevel {
    if score.is_nan() {
        return MaturityLevel::Initial;
    }

    TIERS
        .iter()
        .find(|(_, min, max)| score >= *min && score < *max)
        .map(|(level, _, _)| *level)
        .unwrap_or(if score < 0.0 {
            MaturityLevel::Initial
        } else {
            MaturityLevel::Optimized
        })
}

/// Serializable description of a tier for dashboards and reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturityLevelView {
    pub level: u8,
    pub name: &'static str,
    pub color: &'static str,
    pub min_score: f64,
    pub max_score: f64,
}
