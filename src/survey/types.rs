use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

/// How well the respondent already knows the course instructor. The
/// `NoKnowledge` sentinel controls whether the follow-up detail question
/// is asked at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum InstructorFamiliarity {
    #[default]
    NoKnowledge,
    HeardOf,
    FollowsWork,
}

/// One finalized survey submission. Immutable once created; the store
/// never rewrites a record, only prepends new ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub id: String,
    pub timestamp: String,
    // Background
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub job_title: String,
    pub join_year: String,
    pub has_credential: YesNo,
    // Questions 1-10
    pub brand_definition: String,
    pub favorite_brand: String,
    pub favorite_reason: String,
    pub knowledge_expectation: String,
    pub has_brand_experience: YesNo,
    pub experience_detail: String,
    pub instructor_familiarity: InstructorFamiliarity,
    pub prior_knowledge_detail: String,
    pub accepts_groupwork: YesNo,
    pub course_wishes: String,
}

/// In-progress answer set. Text answers start empty; choice answers are
/// pre-filled with the most common response and must be explicitly
/// changed by the respondent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyDraft {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub job_title: String,
    pub join_year: String,
    pub has_credential: YesNo,
    pub brand_definition: String,
    pub favorite_brand: String,
    pub favorite_reason: String,
    pub knowledge_expectation: String,
    pub has_brand_experience: YesNo,
    pub experience_detail: String,
    pub instructor_familiarity: InstructorFamiliarity,
    pub prior_knowledge_detail: String,
    pub accepts_groupwork: YesNo,
    pub course_wishes: String,
}

impl Default for SurveyDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            gender: Gender::Female,
            job_title: String::new(),
            join_year: String::new(),
            has_credential: YesNo::No,
            brand_definition: String::new(),
            favorite_brand: String::new(),
            favorite_reason: String::new(),
            knowledge_expectation: String::new(),
            has_brand_experience: YesNo::No,
            experience_detail: String::new(),
            instructor_familiarity: InstructorFamiliarity::NoKnowledge,
            prior_knowledge_detail: String::new(),
            accepts_groupwork: YesNo::Yes,
            course_wishes: String::new(),
        }
    }
}

impl SurveyDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finalize(self, id: String, timestamp: String) -> SurveyRecord {
        SurveyRecord {
            id,
            timestamp,
            name: self.name,
            age: self.age,
            gender: self.gender,
            job_title: self.job_title,
            join_year: self.join_year,
            has_credential: self.has_credential,
            brand_definition: self.brand_definition,
            favorite_brand: self.favorite_brand,
            favorite_reason: self.favorite_reason,
            knowledge_expectation: self.knowledge_expectation,
            has_brand_experience: self.has_brand_experience,
            experience_detail: self.experience_detail,
            instructor_familiarity: self.instructor_familiarity,
            prior_knowledge_detail: self.prior_knowledge_detail,
            accepts_groupwork: self.accepts_groupwork,
            course_wishes: self.course_wishes,
        }
    }
}
