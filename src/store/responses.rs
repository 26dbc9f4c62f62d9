use std::fs;
use std::path::{Path, PathBuf};
use tauri::AppHandle;

use crate::error::AppError;
use crate::survey::types::SurveyRecord;

pub fn app_data_root(app: &AppHandle) -> Result<PathBuf, String> {
    let base = tauri::api::path::app_data_dir(&app.config())
        .ok_or_else(|| "Unable to resolve app data dir".to_string())?;
    let root = base.join("brand-survey");
    fs::create_dir_all(&root).map_err(|e| e.to_string())?;
    Ok(root)
}

pub fn responses_path(app: &AppHandle) -> Result<PathBuf, String> {
    Ok(app_data_root(app)?.join("responses.json"))
}

/// Reads the persisted collection, newest first. An absent file, an
/// unreadable file, or corrupt JSON all degrade to an empty collection;
/// startup never fails on bad stored data.
pub fn load(path: &Path) -> Vec<SurveyRecord> {
    if !path.exists() {
        return Vec::new();
    }
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Unable to read {}: {e}; starting empty", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!(
                "Stored responses at {} failed to parse: {e}; starting empty",
                path.display()
            );
            Vec::new()
        }
    }
}

fn persist(path: &Path, records: &[SurveyRecord]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::Storage(format!("Unable to create {}: {e}", parent.display())))?;
    }
    let payload = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Storage(format!("Serialization failed: {e}")))?;
    fs::write(path, payload)
        .map_err(|e| AppError::Storage(format!("Unable to write {}: {e}", path.display())))
}

/// Prepends the record and rewrites the whole snapshot. There is no
/// update or delete, and no dedup by id: a colliding id produces two
/// entries. Returns the new collection.
pub fn append(
    path: &Path,
    mut records: Vec<SurveyRecord>,
    record: SurveyRecord,
) -> Result<Vec<SurveyRecord>, AppError> {
    records.insert(0, record);
    persist(path, &records)?;
    Ok(records)
}
