use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::about::domain::entities::{AboutData, AboutPatch, JourneyItem, ValueItem};
use crate::shared::remote::{ProfileRecord, RemoteError};

const PARAGRAPH_BREAK: &str = "\n\n";

/// Column layout of the `about` table. The bio is one text column with
/// paragraphs separated by blank lines.
#[derive(Debug, Serialize, Deserialize)]
struct AboutRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
    #[serde(default)]
    profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    journey: Option<Vec<JourneyItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    core_values: Option<Vec<ValueItem>>,
}

fn split_paragraphs(text: &str) -> Vec<String> {
    text.split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

impl ProfileRecord for AboutData {
    type Patch = AboutPatch;

    const TABLE: &'static str = "about";
    const LABEL: &'static str = "about";

    fn defaults() -> Self {
        AboutData::default()
    }

    fn from_row(row: Value) -> Result<Self, RemoteError> {
        let row: AboutRow = serde_json::from_value(row)?;
        let fallback = AboutData::default();

        let bio = row
            .bio
            .as_deref()
            .map(split_paragraphs)
            .filter(|paragraphs| !paragraphs.is_empty())
            .unwrap_or(fallback.bio);

        Ok(AboutData {
            headline: row
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(fallback.headline),
            bio,
            image: row.profile_image.filter(|i| !i.trim().is_empty()),
            journey: row.journey.unwrap_or(fallback.journey),
            values: row.core_values.unwrap_or(fallback.values),
        })
    }

    fn to_row(&self) -> Result<Value, RemoteError> {
        let row = AboutRow {
            title: Some(self.headline.clone()),
            bio: Some(self.bio.join(PARAGRAPH_BREAK)),
            profile_image: self.image.clone(),
            journey: Some(self.journey.clone()),
            core_values: Some(self.values.clone()),
        };
        Ok(serde_json::to_value(row)?)
    }

    fn apply(&mut self, patch: AboutPatch) {
        patch.apply(self);
    }
}
