use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::MetricId;

/// Session answers keyed by metric; a missing key or `None` means unanswered.
///
/// Values arrive already coerced to a comparable numeric domain, whatever the
/// metric's declared answer type was.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAnswers {
    values: BTreeMap<MetricId, Option<f64>>,
}

impl RawAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, metric_id: impl Into<String>, value: f64) -> Self {
        self.insert(MetricId(metric_id.into()), Some(value));
        self
    }

    pub fn insert(&mut self, metric_id: MetricId, value: Option<f64>) {
        self.values.insert(metric_id, value);
    }

    /// The recorded value for a metric, if it was answered.
    pub fn value_for(&self, metric_id: &MetricId) -> Option<f64> {
        self.values.get(metric_id).copied().flatten()
    }

    pub fn is_answered(&self, metric_id: &MetricId) -> bool {
        self.value_for(metric_id).is_some()
    }

    pub fn answered_count(&self) -> usize {
        self.values.values().filter(|value| value.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Layer what-if answers over the recorded session; overrides win, including
    /// explicit `None` entries that clear an existing answer.
    pub fn with_overrides(&self, overrides: &RawAnswers) -> RawAnswers {
        let mut merged = self.clone();
        for (metric_id, value) in &overrides.values {
            merged.values.insert(metric_id.clone(), *value);
        }
        merged
    }
}

impl FromIterator<(MetricId, Option<f64>)> for RawAnswers {
    fn from_iter<T: IntoIterator<Item = (MetricId, Option<f64>)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_entries_are_unanswered() {
        let mut answers = RawAnswers::new().answer("m-1", 3.0);
        answers.insert(MetricId::new("m-2"), None);

        assert!(answers.is_answered(&MetricId::new("m-1")));
        assert!(!answers.is_answered(&MetricId::new("m-2")));
        assert!(!answers.is_answered(&MetricId::new("m-3")));
        assert_eq!(answers.answered_count(), 1);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn overrides_replace_and_clear_session_answers() {
        let session = RawAnswers::new().answer("m-1", 1.0).answer("m-2", 2.0);
        let mut what_if = RawAnswers::new().answer("m-1", 4.0).answer("m-3", 5.0);
        what_if.insert(MetricId::new("m-2"), None);

        let merged = session.with_overrides(&what_if);

        assert_eq!(merged.value_for(&MetricId::new("m-1")), Some(4.0));
        assert_eq!(merged.value_for(&MetricId::new("m-2")), None);
        assert_eq!(merged.value_for(&MetricId::new("m-3")), Some(5.0));
        assert_eq!(session.value_for(&MetricId::new("m-1")), Some(1.0));
    }

    #[test]
    fn deserializes_from_json_object_with_nulls() {
        let answers: RawAnswers =
            serde_json::from_str(r#"{"m-1": 2.5, "m-2": null}"#).expect("answers parse");

        assert_eq!(answers.value_for(&MetricId::new("m-1")), Some(2.5));
        assert!(!answers.is_answered(&MetricId::new("m-2")));
    }
}
