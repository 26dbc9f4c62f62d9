#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod analysis;
mod commands;
mod error;
mod store;
mod survey;

use std::sync::Mutex;

use analysis::requester::AnalysisRequester;
use commands::analysis::AnalysisState;

fn main() {
  env_logger::init();
  tauri::Builder::default()
    .manage(AnalysisState(Mutex::new(AnalysisRequester::new())))
    .invoke_handler(tauri::generate_handler![
      commands::survey::list_responses,
      commands::survey::submit_survey,
      commands::analysis::run_analysis,
      commands::analysis::get_analysis_status,
      commands::analysis::analysis_get_settings,
      commands::analysis::analysis_save_settings
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
