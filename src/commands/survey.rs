use tauri::AppHandle;

use crate::store::responses::{self, responses_path};
use crate::survey::form::IntakeForm;
use crate::survey::types::{SurveyDraft, SurveyRecord};

#[tauri::command]
pub fn list_responses(app: AppHandle) -> Result<Vec<SurveyRecord>, String> {
    let path = responses_path(&app)?;
    Ok(responses::load(&path))
}

/// Validates and finalizes one draft, appends it to the store, and
/// returns the updated collection (newest first). A validation failure
/// surfaces the missing field keys and leaves the store untouched.
#[tauri::command]
pub fn submit_survey(app: AppHandle, draft: SurveyDraft) -> Result<Vec<SurveyRecord>, String> {
    let record = IntakeForm::with_draft(draft)
        .submit()
        .map_err(|e| match e.missing_fields() {
            Some(fields) => format!("Please complete: {}", fields.join(", ")),
            None => e.to_string(),
        })?;
    let path = responses_path(&app)?;
    let existing = responses::load(&path);
    responses::append(&path, existing, record).map_err(String::from)
}
