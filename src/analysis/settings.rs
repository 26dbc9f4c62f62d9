use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tauri::AppHandle;

use crate::error::AppError;
use crate::store::responses::app_data_root;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AnalysisSettings {
    /// Credential lookup happens at call time: the saved settings value
    /// wins, then the GEMINI_API_KEY environment variable. Absence is a
    /// configuration error the requester surfaces before any network
    /// attempt.
    pub fn resolve_api_key(&self) -> Result<String, AppError> {
        if let Some(key) = self.api_key.as_deref() {
            if !key.trim().is_empty() {
                return Ok(key.trim().to_string());
            }
        }
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(
                    "No Gemini API key configured. Set one in settings or export GEMINI_API_KEY."
                        .to_string(),
                )
            })
    }
}

pub fn settings_path(app: &AppHandle) -> Result<PathBuf, String> {
    Ok(app_data_root(app)?.join("settings").join("analysis.json"))
}

pub fn load_analysis_settings(app: &AppHandle) -> Result<AnalysisSettings, String> {
    let path = settings_path(app)?;
    if !path.exists() {
        let defaults = AnalysisSettings::default();
        save_analysis_settings(app, &defaults)?;
        return Ok(defaults);
    }
    let raw =
        fs::read_to_string(&path).map_err(|e| format!("Unable to read {}: {e}", path.display()))?;
    if raw.trim().is_empty() {
        let defaults = AnalysisSettings::default();
        save_analysis_settings(app, &defaults)?;
        return Ok(defaults);
    }
    serde_json::from_str(&raw).map_err(|e| format!("Invalid analysis settings JSON: {e}"))
}

pub fn save_analysis_settings(app: &AppHandle, settings: &AnalysisSettings) -> Result<(), String> {
    let path = settings_path(app)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let payload = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(&path, payload).map_err(|e| format!("Unable to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::AnalysisSettings;

    #[test]
    fn explicit_key_wins() {
        let settings = AnalysisSettings {
            api_key: Some("  sk-test  ".to_string()),
            ..AnalysisSettings::default()
        };
        assert_eq!(settings.resolve_api_key().expect("key"), "sk-test");
    }

    #[test]
    fn blank_key_is_treated_as_absent() {
        let settings = AnalysisSettings {
            api_key: Some("   ".to_string()),
            ..AnalysisSettings::default()
        };
        if std::env::var("GEMINI_API_KEY").is_err() {
            assert!(settings.resolve_api_key().is_err());
        }
    }
}
