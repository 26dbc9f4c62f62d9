use chrono::Utc;
use uuid::Uuid;

use super::rules::missing_fields;
use super::types::{SurveyDraft, SurveyRecord};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

/// One respondent's pass through the interview. Owns the draft while it
/// is editable; a valid submit finalizes the draft into a record and the
/// form instance is done (no path back to editing).
#[derive(Debug)]
pub struct IntakeForm {
    draft: SurveyDraft,
    phase: FormPhase,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::with_draft(SurveyDraft::new())
    }

    pub fn with_draft(draft: SurveyDraft) -> Self {
        Self {
            draft,
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &SurveyDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut SurveyDraft {
        &mut self.draft
    }

    /// Validates the draft against the current rule set and, if complete,
    /// stamps identity and finalization time. An invalid submit leaves
    /// the draft untouched and the form editable, so it can be repeated
    /// safely after the respondent fills in the gaps.
    pub fn submit(&mut self) -> Result<SurveyRecord, AppError> {
        if self.phase == FormPhase::Submitted {
            return Err(AppError::Validation(vec!["alreadySubmitted".to_string()]));
        }
        let missing = missing_fields(&self.draft);
        if !missing.is_empty() {
            return Err(AppError::Validation(
                missing.iter().map(|key| key.to_string()).collect(),
            ));
        }
        self.phase = FormPhase::Submitted;
        let record = self
            .draft
            .clone()
            .finalize(Uuid::new_v4().to_string(), Utc::now().to_rfc3339());
        Ok(record)
    }
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FormPhase, IntakeForm};
    use crate::survey::types::{SurveyDraft, YesNo};
    use chrono::{DateTime, Utc};

    fn complete_draft() -> SurveyDraft {
        let mut draft = SurveyDraft::new();
        draft.name = "Amy".to_string();
        draft.age = "29".to_string();
        draft.job_title = "Copywriter".to_string();
        draft.join_year = "2024".to_string();
        draft.brand_definition = "Reputation at scale".to_string();
        draft.favorite_brand = "Patagonia".to_string();
        draft.favorite_reason = "Values show in the product".to_string();
        draft.knowledge_expectation = "Naming and tone".to_string();
        draft.course_wishes = "Hands-on critique".to_string();
        draft
    }

    #[test]
    fn valid_submit_finalizes_and_stamps_identity() {
        let before = Utc::now();
        let mut form = IntakeForm::with_draft(complete_draft());
        let record = form.submit().expect("valid draft should submit");

        assert!(!record.id.is_empty());
        let stamped: DateTime<Utc> = record
            .timestamp
            .parse()
            .expect("timestamp should be RFC 3339");
        assert!(stamped >= before);
        assert_eq!(form.phase(), FormPhase::Submitted);
        // Question 5 defaulted to "no", so the companion stays empty.
        assert!(record.experience_detail.is_empty());
    }

    #[test]
    fn invalid_submit_keeps_draft_and_phase() {
        let mut draft = complete_draft();
        draft.brand_definition.clear();
        let mut form = IntakeForm::with_draft(draft);

        let err = form.submit().expect_err("missing q1 should fail");
        assert_eq!(
            err.missing_fields(),
            Some(&["brandDefinition".to_string()][..])
        );
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.draft().brand_definition.is_empty());

        // Repeated invalid submits are rejected the same way.
        assert!(form.submit().is_err());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn revealed_companion_blocks_submit_until_answered() {
        let mut draft = complete_draft();
        draft.has_brand_experience = YesNo::Yes;
        let mut form = IntakeForm::with_draft(draft);
        assert!(form.submit().is_err());

        form.draft_mut().experience_detail = "Two years in-house".to_string();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn submitted_form_rejects_a_second_submit() {
        let mut form = IntakeForm::with_draft(complete_draft());
        form.submit().expect("first submit");
        assert!(form.submit().is_err());
    }

    #[test]
    fn two_submissions_get_distinct_ids() {
        let first = IntakeForm::with_draft(complete_draft())
            .submit()
            .expect("first");
        let second = IntakeForm::with_draft(complete_draft())
            .submit()
            .expect("second");
        assert_ne!(first.id, second.id);
    }
}
