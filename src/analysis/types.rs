use serde::{Deserialize, Serialize};

/// One model-written insight for a single survey question. Insight order
/// is whatever the model returned; it is not validated against question
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInsight {
    pub id: u32,
    pub title: String,
    pub insight: String,
}

/// Structured output of one analysis call over the full submission
/// collection. Rebuilt from scratch on every successful call and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub per_question_insight: Vec<QuestionInsight>,
    pub student_persona: String,
    pub course_strategy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Idle,
    Pending,
    Success,
    Failed,
}

/// Snapshot of the requester for the admin view: current status, the
/// most recent successful report (retained across a later failure), and
/// the last error message if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    pub status: AnalysisStatus,
    pub report: Option<AnalysisReport>,
    pub last_error: Option<String>,
}
