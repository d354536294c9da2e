use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_WEIGHT: f64 = 1.0;

/// Identifier wrapper for maturity pillars.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillarId(pub String);

/// Identifier wrapper for topics within a pillar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub String);

/// Identifier wrapper for individual metrics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricId(pub String);

macro_rules! id_helpers {
    ($($name:ident),*) => {
        $(
            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

id_helpers!(PillarId, TopicId, MetricId);

/// Read-only pillar → topic → metric hierarchy supplied per calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentTree {
    pub pillars: Vec<Pillar>,
}

impl AssessmentTree {
    pub fn new(pillars: Vec<Pillar>) -> Self {
        Self { pillars }
    }

    pub fn active_metrics(&self) -> impl Iterator<Item = &Metric> {
        self.pillars
            .iter()
            .flat_map(|pillar| pillar.topics.iter())
            .flat_map(|topic| topic.metrics.iter())
            .filter(|metric| metric.active)
    }
}

/// Top-level assessment category such as Security or Reliability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub id: PillarId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_weight", deserialize_with = "sanitized_weight")]
    pub weight: f64,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Pillar {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PillarId(id.into()),
            name: name.into(),
            category: None,
            weight: DEFAULT_WEIGHT,
            topics: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = sanitize_weight(weight);
        self
    }

    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }
}

/// Themed subgroup of metrics within a pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    #[serde(default = "default_weight", deserialize_with = "sanitized_weight")]
    pub weight: f64,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl Topic {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: TopicId(id.into()),
            name: name.into(),
            weight: DEFAULT_WEIGHT,
            metrics: Vec::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = sanitize_weight(weight);
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }
}

/// Single assessable criterion with a declared difficulty tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: MetricId,
    #[serde(default)]
    pub name: String,
    pub level: u32,
    #[serde(default = "default_weight", deserialize_with = "sanitized_weight")]
    pub weight: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Metric {
    pub fn new(id: impl Into<String>, level: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id: MetricId(id),
            level,
            weight: DEFAULT_WEIGHT,
            active: true,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = sanitize_weight(weight);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Negative or non-finite weights never reach the arithmetic.
pub fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

fn default_active() -> bool {
    true
}

fn sanitized_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map(sanitize_weight).unwrap_or(DEFAULT_WEIGHT))
}
