use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::hero::domain::entities::{HeroData, HeroPatch};
use crate::shared::remote::{ProfileRecord, RemoteError};

/// Column layout of the `hero` table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HeroRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Shown as the hero title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_link: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    resume_url: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProfileRecord for HeroData {
    type Patch = HeroPatch;

    const TABLE: &'static str = "hero";
    const LABEL: &'static str = "hero";

    fn defaults() -> Self {
        HeroData::default()
    }

    fn from_row(row: Value) -> Result<Self, RemoteError> {
        let row: HeroRow = serde_json::from_value(row)?;
        let fallback = HeroData::default();

        Ok(HeroData {
            name: non_blank(row.name).unwrap_or(fallback.name),
            title: non_blank(row.tagline).unwrap_or(fallback.title),
            description: non_blank(row.description).unwrap_or(fallback.description),
            cta_text: non_blank(row.cta_text).unwrap_or(fallback.cta_text),
            cta_link: non_blank(row.cta_link).unwrap_or(fallback.cta_link),
            image: non_blank(row.image_url),
            resume_url: non_blank(row.resume_url),
        })
    }

    fn to_row(&self) -> Result<Value, RemoteError> {
        let row = HeroRow {
            name: Some(self.name.clone()),
            tagline: Some(self.title.clone()),
            description: Some(self.description.clone()),
            cta_text: Some(self.cta_text.clone()),
            cta_link: Some(self.cta_link.clone()),
            image_url: self.image.clone(),
            resume_url: self.resume_url.clone(),
        };
        Ok(serde_json::to_value(row)?)
    }

    fn apply(&mut self, patch: HeroPatch) {
        patch.apply(self);
    }
}
