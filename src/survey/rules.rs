use super::types::{InstructorFamiliarity, SurveyDraft};

/// When a field must be answered before submit. Conditional variants key
/// off a sibling answer in the same draft; while the predicate is false
/// the field is hidden and drops out of the required set entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    IfPriorExperience,
    IfKnowsInstructor,
}

pub struct FieldRule {
    pub key: &'static str,
    pub requirement: Requirement,
}

/// One entry per submittable field, in presentation order. Choice fields
/// carry pre-filled defaults and can never be empty; they are listed so
/// the required set is complete, but only text fields can go missing.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule { key: "name", requirement: Requirement::Always },
    FieldRule { key: "age", requirement: Requirement::Always },
    FieldRule { key: "gender", requirement: Requirement::Always },
    FieldRule { key: "jobTitle", requirement: Requirement::Always },
    FieldRule { key: "joinYear", requirement: Requirement::Always },
    FieldRule { key: "hasCredential", requirement: Requirement::Always },
    FieldRule { key: "brandDefinition", requirement: Requirement::Always },
    FieldRule { key: "favoriteBrand", requirement: Requirement::Always },
    FieldRule { key: "favoriteReason", requirement: Requirement::Always },
    FieldRule { key: "knowledgeExpectation", requirement: Requirement::Always },
    FieldRule { key: "hasBrandExperience", requirement: Requirement::Always },
    FieldRule { key: "experienceDetail", requirement: Requirement::IfPriorExperience },
    FieldRule { key: "instructorFamiliarity", requirement: Requirement::Always },
    FieldRule { key: "priorKnowledgeDetail", requirement: Requirement::IfKnowsInstructor },
    FieldRule { key: "acceptsGroupwork", requirement: Requirement::Always },
    FieldRule { key: "courseWishes", requirement: Requirement::Always },
];

fn requirement_met(requirement: Requirement, draft: &SurveyDraft) -> bool {
    match requirement {
        Requirement::Always => true,
        Requirement::IfPriorExperience => draft.has_brand_experience.is_yes(),
        Requirement::IfKnowsInstructor => {
            draft.instructor_familiarity != InstructorFamiliarity::NoKnowledge
        }
    }
}

pub fn is_field_visible(draft: &SurveyDraft, key: &str) -> bool {
    FIELD_RULES
        .iter()
        .find(|rule| rule.key == key)
        .map(|rule| requirement_met(rule.requirement, draft))
        .unwrap_or(false)
}

pub fn required_fields(draft: &SurveyDraft) -> Vec<&'static str> {
    FIELD_RULES
        .iter()
        .filter(|rule| requirement_met(rule.requirement, draft))
        .map(|rule| rule.key)
        .collect()
}

/// Text answer for a field key, or None for choice fields (those always
/// hold a value and cannot be missing).
fn answer_text<'a>(draft: &'a SurveyDraft, key: &str) -> Option<&'a str> {
    match key {
        "name" => Some(&draft.name),
        "age" => Some(&draft.age),
        "jobTitle" => Some(&draft.job_title),
        "joinYear" => Some(&draft.join_year),
        "brandDefinition" => Some(&draft.brand_definition),
        "favoriteBrand" => Some(&draft.favorite_brand),
        "favoriteReason" => Some(&draft.favorite_reason),
        "knowledgeExpectation" => Some(&draft.knowledge_expectation),
        "experienceDetail" => Some(&draft.experience_detail),
        "priorKnowledgeDetail" => Some(&draft.prior_knowledge_detail),
        "courseWishes" => Some(&draft.course_wishes),
        _ => None,
    }
}

/// Required fields whose answer is still empty in the given draft.
pub fn missing_fields(draft: &SurveyDraft) -> Vec<&'static str> {
    FIELD_RULES
        .iter()
        .filter(|rule| requirement_met(rule.requirement, draft))
        .filter(|rule| {
            answer_text(draft, rule.key)
                .map(|answer| answer.trim().is_empty())
                .unwrap_or(false)
        })
        .map(|rule| rule.key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{is_field_visible, missing_fields, required_fields};
    use crate::survey::types::{InstructorFamiliarity, SurveyDraft, YesNo};

    fn filled_draft() -> SurveyDraft {
        let mut draft = SurveyDraft::new();
        draft.name = "Amy".to_string();
        draft.age = "29".to_string();
        draft.job_title = "Designer".to_string();
        draft.join_year = "2023".to_string();
        draft.brand_definition = "A promise".to_string();
        draft.favorite_brand = "Muji".to_string();
        draft.favorite_reason = "Consistency".to_string();
        draft.knowledge_expectation = "Positioning".to_string();
        draft.course_wishes = "More cases".to_string();
        draft
    }

    #[test]
    fn conditional_fields_hidden_by_default() {
        let draft = SurveyDraft::new();
        assert!(!is_field_visible(&draft, "experienceDetail"));
        assert!(!is_field_visible(&draft, "priorKnowledgeDetail"));
        assert!(is_field_visible(&draft, "brandDefinition"));
    }

    #[test]
    fn toggling_experience_changes_only_its_companion() {
        let mut draft = SurveyDraft::new();
        let before = required_fields(&draft);
        draft.has_brand_experience = YesNo::Yes;
        let after = required_fields(&draft);

        assert!(!before.contains(&"experienceDetail"));
        assert!(after.contains(&"experienceDetail"));
        let only_in_after: Vec<_> = after
            .iter()
            .filter(|key| !before.contains(key))
            .collect();
        assert_eq!(only_in_after, vec![&"experienceDetail"]);
    }

    #[test]
    fn toggling_familiarity_changes_only_its_companion() {
        let mut draft = SurveyDraft::new();
        let before = required_fields(&draft);
        draft.instructor_familiarity = InstructorFamiliarity::HeardOf;
        let after = required_fields(&draft);

        assert!(!before.contains(&"priorKnowledgeDetail"));
        assert!(after.contains(&"priorKnowledgeDetail"));
        assert_eq!(after.len(), before.len() + 1);
    }

    #[test]
    fn complete_draft_has_no_missing_fields() {
        assert!(missing_fields(&filled_draft()).is_empty());
    }

    #[test]
    fn hidden_companion_is_not_missing() {
        let draft = filled_draft();
        assert_eq!(draft.has_brand_experience, YesNo::No);
        assert!(draft.experience_detail.is_empty());
        assert!(missing_fields(&draft).is_empty());
    }

    #[test]
    fn revealed_companion_becomes_missing_until_answered() {
        let mut draft = filled_draft();
        draft.has_brand_experience = YesNo::Yes;
        assert_eq!(missing_fields(&draft), vec!["experienceDetail"]);
        draft.experience_detail = "Ran a rebrand in 2022".to_string();
        assert!(missing_fields(&draft).is_empty());
    }

    #[test]
    fn blank_required_answer_is_reported() {
        let mut draft = filled_draft();
        draft.brand_definition = "   ".to_string();
        assert_eq!(missing_fields(&draft), vec!["brandDefinition"]);
    }
}
