use super::client::{parse_report, TextGenerator};
use super::prompt::{build_prompt, response_schema};
use super::types::{AnalysisReport, AnalysisSnapshot, AnalysisStatus};
use crate::error::AppError;
use crate::survey::types::SurveyRecord;

/// Owns the lifecycle of analysis calls: the status machine
/// idle -> pending -> success | failed, the most recent report, and the
/// last error. A later failure keeps the previous successful report
/// visible next to the error.
pub struct AnalysisRequester {
    status: AnalysisStatus,
    report: Option<AnalysisReport>,
    last_error: Option<String>,
}

impl AnalysisRequester {
    pub fn new() -> Self {
        Self {
            status: AnalysisStatus::Idle,
            report: None,
            last_error: None,
        }
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    pub fn snapshot(&self) -> AnalysisSnapshot {
        AnalysisSnapshot {
            status: self.status,
            report: self.report.clone(),
            last_error: self.last_error.clone(),
        }
    }

    /// One attempt over the full collection. The pending and empty-store
    /// guards fail before `connect` runs, so no credential is resolved
    /// and no network call is issued for a rejected request.
    pub fn run<F>(
        &mut self,
        records: &[SurveyRecord],
        connect: F,
    ) -> Result<AnalysisReport, AppError>
    where
        F: FnOnce() -> Result<Box<dyn TextGenerator>, AppError>,
    {
        if self.status == AnalysisStatus::Pending {
            return Err(AppError::Configuration(
                "An analysis request is already running.".to_string(),
            ));
        }
        if records.is_empty() {
            return Err(AppError::Configuration(
                "No submissions to analyze yet.".to_string(),
            ));
        }

        self.status = AnalysisStatus::Pending;
        log::info!("Starting analysis over {} submissions", records.len());

        let attempt = (|| {
            let generator = connect()?;
            let prompt = build_prompt(records)?;
            let raw = generator.generate(&prompt, &response_schema())?;
            parse_report(&raw)
        })();

        match attempt {
            Ok(report) => {
                self.status = AnalysisStatus::Success;
                self.last_error = None;
                self.report = Some(report.clone());
                log::info!("Analysis succeeded");
                Ok(report)
            }
            Err(err) => {
                self.status = AnalysisStatus::Failed;
                self.last_error = Some(err.to_string());
                log::warn!("Analysis failed: {err}");
                Err(err)
            }
        }
    }
}

impl Default for AnalysisRequester {
    fn default() -> Self {
        Self::new()
    }
}
