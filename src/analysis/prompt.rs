use serde_json::Value;

use crate::error::AppError;
use crate::survey::types::SurveyRecord;

/// Question titles in interview order, used both in the instruction text
/// and by the frontend when rendering insights.
pub const QUESTION_TITLES: &[&str] = &[
    "What does 'brand' mean to you?",
    "Which brand do you like best?",
    "Why is it your favorite?",
    "What brand knowledge do you hope to gain?",
    "Do you have prior brand-activity experience?",
    "What did that experience involve?",
    "How familiar are you with the instructor?",
    "What do you already know about the instructor?",
    "Are you willing to do group work?",
    "What else do you wish for from the course?",
];

/// Builds the single outbound instruction. The whole collection is
/// embedded verbatim as JSON; there is no chunking or size cap, so very
/// large collections produce a proportionally large request body.
pub fn build_prompt(records: &[SurveyRecord]) -> Result<String, AppError> {
    let serialized = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Storage(format!("Serialization failed: {e}")))?;

    let question_list = QUESTION_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| format!("{}. {}", i + 1, title))
        .collect::<Vec<String>>()
        .join("\n");

    Ok(format!(
        "You are analyzing pre-course survey submissions for a brand-strategy \
course. Each submission answers these ten questions:\n{question_list}\n\n\
Raw submissions as JSON:\n{serialized}\n\n\
Produce, as JSON matching the response schema exactly:\n\
1. perQuestionInsight: one entry per question (id 1-10, the question title, \
and a concise synthesis of how the group answered it).\n\
2. studentPersona: a composite description of the typical participant.\n\
3. courseStrategy: a concrete recommendation for how the instructor should \
prepare and pitch the course for this group."
    ))
}

/// Gemini structured-output schema pinning the reply to the report shape:
/// perQuestionInsight items carry id/title/insight, plus studentPersona
/// and courseStrategy, all required.
pub fn response_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "perQuestionInsight": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "INTEGER" },
                        "title": { "type": "STRING" },
                        "insight": { "type": "STRING" }
                    },
                    "required": ["id", "title", "insight"]
                }
            },
            "studentPersona": { "type": "STRING" },
            "courseStrategy": { "type": "STRING" }
        },
        "required": ["perQuestionInsight", "studentPersona", "courseStrategy"]
    })
}

#[cfg(test)]
mod tests {
    use super::{build_prompt, response_schema, QUESTION_TITLES};
    use crate::survey::types::SurveyDraft;

    #[test]
    fn prompt_embeds_every_record_verbatim() {
        let mut first = SurveyDraft::new();
        first.name = "Amy".to_string();
        let mut second = SurveyDraft::new();
        second.name = "Ben".to_string();
        let records = vec![
            first.finalize("a".to_string(), "2026-08-27T09:00:00+00:00".to_string()),
            second.finalize("b".to_string(), "2026-08-27T09:05:00+00:00".to_string()),
        ];

        let prompt = build_prompt(&records).expect("prompt");
        assert!(prompt.contains("\"Amy\""));
        assert!(prompt.contains("\"Ben\""));
        for title in QUESTION_TITLES {
            assert!(prompt.contains(title));
        }
    }

    #[test]
    fn schema_requires_the_three_report_keys() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required array")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(
            required,
            vec!["perQuestionInsight", "studentPersona", "courseStrategy"]
        );
        let item_required = &schema["properties"]["perQuestionInsight"]["items"]["required"];
        assert_eq!(
            item_required,
            &serde_json::json!(["id", "title", "insight"])
        );
    }
}
