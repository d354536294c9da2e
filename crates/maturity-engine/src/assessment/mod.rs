//! Assessment inputs: the pillar/topic/metric tree and a session's raw answers.

mod answers;
pub mod domain;
mod import;

pub use answers::RawAnswers;
pub use domain::{
    sanitize_weight, AssessmentTree, Metric, MetricId, Pillar, PillarId, Topic, TopicId,
};
pub use import::{AnswerImportError, AnswerSheetImporter};
