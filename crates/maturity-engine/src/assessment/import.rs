use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::answers::RawAnswers;
use super::domain::MetricId;

#[derive(Debug)]
pub enum AnswerImportError {
    Csv(csv::Error),
    InvalidValue { metric_id: String, value: String },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Csv(err) => write!(f, "invalid answer sheet data: {}", err),
            AnswerImportError::InvalidValue { metric_id, value } => write!(
                f,
                "answer for metric {} is not a number: '{}'",
                metric_id, value
            ),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::InvalidValue { .. } => None,
        }
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads `metric_id,value` answer sheets exported by the assessment UI.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<RawAnswers, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut answers = RawAnswers::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            let value = match row.value {
                Some(raw) => Some(parse_value(&row.metric_id, &raw)?),
                None => None,
            };
            answers.insert(MetricId(row.metric_id), value);
        }

        Ok(answers)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    metric_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    value: Option<String>,
}

fn parse_value(metric_id: &str, raw: &str) -> Result<f64, AnswerImportError> {
    let invalid = || AnswerImportError::InvalidValue {
        metric_id: metric_id.to_string(),
        value: raw.to_string(),
    };

    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" => return Ok(1.0),
        "false" | "no" => return Ok(0.0),
        _ => {}
    }

    let value = raw.parse::<f64>().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn blank_values_are_recorded_as_unanswered() {
        let answers = AnswerSheetImporter::from_reader(Cursor::new(
            "metric_id,value\nsec-mfa, 3 \nsec-sso,\n",
        ))
        .expect("sheet parses");

        assert_eq!(answers.value_for(&MetricId::new("sec-mfa")), Some(3.0));
        assert!(!answers.is_answered(&MetricId::new("sec-sso")));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn boolean_answers_are_coerced() {
        let answers = AnswerSheetImporter::from_reader(Cursor::new(
            "metric_id,value\nm-yes,yes\nm-false,FALSE\n",
        ))
        .expect("sheet parses");

        assert_eq!(answers.value_for(&MetricId::new("m-yes")), Some(1.0));
        assert_eq!(answers.value_for(&MetricId::new("m-false")), Some(0.0));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let error = AnswerSheetImporter::from_reader(Cursor::new("metric_id,value\nm-1,lots\n"))
            .expect_err("expected invalid value");

        match error {
            AnswerImportError::InvalidValue { metric_id, value } => {
                assert_eq!(metric_id, "m-1");
                assert_eq!(value, "lots");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }
}
