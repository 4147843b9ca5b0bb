use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::resume::domain::entities::{
    Certification, Education, Experience, ResumeData, ResumePatch,
};
use crate::shared::remote::{ProfileRecord, RemoteError};

/// Column layout of the `resume` table.
#[derive(Debug, Serialize, Deserialize)]
struct ResumeRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(default)]
    cv_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    work_experience: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    education: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    certifications: Option<Vec<Certification>>,
}

impl ProfileRecord for ResumeData {
    type Patch = ResumePatch;

    const TABLE: &'static str = "resume";
    const LABEL: &'static str = "resume";

    fn defaults() -> Self {
        ResumeData::default()
    }

    fn from_row(row: Value) -> Result<Self, RemoteError> {
        let row: ResumeRow = serde_json::from_value(row)?;
        let fallback = ResumeData::default();

        Ok(ResumeData {
            summary: row
                .summary
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(fallback.summary),
            download_url: row.cv_url.filter(|u| !u.trim().is_empty()),
            experience: row.work_experience.unwrap_or(fallback.experience),
            education: row.education.unwrap_or(fallback.education),
            certifications: row.certifications.unwrap_or(fallback.certifications),
        })
    }

    fn to_row(&self) -> Result<Value, RemoteError> {
        let row = ResumeRow {
            summary: Some(self.summary.clone()),
            cv_url: self.download_url.clone(),
            work_experience: Some(self.experience.clone()),
            education: Some(self.education.clone()),
            certifications: Some(self.certifications.clone()),
        };
        Ok(serde_json::to_value(row)?)
    }

    fn apply(&mut self, patch: ResumePatch) {
        patch.apply(self);
    }
}
