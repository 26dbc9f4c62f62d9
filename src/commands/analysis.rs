use std::sync::Mutex;
use tauri::AppHandle;

use crate::analysis::client::{GeminiClient, TextGenerator};
use crate::analysis::requester::AnalysisRequester;
use crate::analysis::settings::{
    load_analysis_settings, save_analysis_settings, AnalysisSettings,
};
use crate::analysis::types::{AnalysisReport, AnalysisSnapshot};
use crate::store::responses::{self, responses_path};

/// Managed requester instance. The mutex serializes analysis calls on
/// top of the requester's own pending guard.
pub struct AnalysisState(pub Mutex<AnalysisRequester>);

#[tauri::command]
pub fn run_analysis(
    app: AppHandle,
    state: tauri::State<AnalysisState>,
) -> Result<AnalysisReport, String> {
    let path = responses_path(&app)?;
    let records = responses::load(&path);
    let settings = load_analysis_settings(&app)?;

    let mut requester = state
        .0
        .lock()
        .map_err(|_| "Analysis state is poisoned".to_string())?;
    requester
        .run(&records, || {
            GeminiClient::new(&settings).map(|c| Box::new(c) as Box<dyn TextGenerator>)
        })
        .map_err(String::from)
}

#[tauri::command]
pub fn get_analysis_status(state: tauri::State<AnalysisState>) -> Result<AnalysisSnapshot, String> {
    let requester = state
        .0
        .lock()
        .map_err(|_| "Analysis state is poisoned".to_string())?;
    Ok(requester.snapshot())
}

#[tauri::command]
pub fn analysis_get_settings(app: AppHandle) -> Result<AnalysisSettings, String> {
    load_analysis_settings(&app)
}

#[tauri::command]
pub fn analysis_save_settings(
    app: AppHandle,
    settings: AnalysisSettings,
) -> Result<AnalysisSettings, String> {
    save_analysis_settings(&app, &settings)?;
    Ok(settings)
}
