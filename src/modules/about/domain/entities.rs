use serde::{Deserialize, Serialize};

use crate::shared::patch::PatchField;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    pub headline: String,
    /// One entry per paragraph.
    pub bio: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub journey: Vec<JourneyItem>,
    #[serde(default)]
    pub values: Vec<ValueItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JourneyItem {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValueItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Default for AboutData {
    fn default() -> Self {
        Self {
            headline: "About me".to_string(),
            bio: vec![
                "I'm a developer who enjoys turning fuzzy ideas into dependable software."
                    .to_string(),
                "Lately I've been working on the seams between frontends and the \
                 services they depend on."
                    .to_string(),
            ],
            image: Some("/images/about.jpg".to_string()),
            journey: vec![
                JourneyItem {
                    year: "2016".to_string(),
                    title: "First job".to_string(),
                    description: "Joined an agency building marketing sites.".to_string(),
                },
                JourneyItem {
                    year: "2019".to_string(),
                    title: "Product engineering".to_string(),
                    description: "Moved to a SaaS team owning billing and onboarding."
                        .to_string(),
                },
                JourneyItem {
                    year: "2023".to_string(),
                    title: "Independent".to_string(),
                    description: "Consulting for startups on web platforms.".to_string(),
                },
            ],
            values: vec![
                ValueItem {
                    title: "Clarity".to_string(),
                    description: "Simple code and honest estimates.".to_string(),
                    icon: Some("lightbulb".to_string()),
                },
                ValueItem {
                    title: "Craft".to_string(),
                    description: "Details matter, especially the boring ones.".to_string(),
                    icon: Some("hammer".to_string()),
                },
            ],
        }
    }
}

/// Lists are replaced whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPatch {
    pub headline: Option<String>,
    pub bio: Option<Vec<String>>,
    #[serde(default)]
    pub image: PatchField<String>,
    pub journey: Option<Vec<JourneyItem>>,
    pub values: Option<Vec<ValueItem>>,
}

impl AboutPatch {
    pub fn apply(self, about: &mut AboutData) {
        if let Some(headline) = self.headline {
            about.headline = headline;
        }
        if let Some(bio) = self.bio {
            about.bio = bio;
        }
        self.image.apply_to_option(&mut about.image);
        if let Some(journey) = self.journey {
            about.journey = journey;
        }
        if let Some(values) = self.values {
            about.values = values;
        }
    }
}
