use serde::{Deserialize, Serialize};

use crate::shared::patch::PatchField;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroData {
    pub name: String,
    pub title: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl Default for HeroData {
    fn default() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            title: "Full-Stack Developer".to_string(),
            description: "I build fast, accessible web applications and the services \
                          behind them."
                .to_string(),
            cta_text: "View my work".to_string(),
            cta_link: "#projects".to_string(),
            image: Some("/images/profile.jpg".to_string()),
            resume_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    #[serde(default)]
    pub image: PatchField<String>,
    #[serde(default)]
    pub resume_url: PatchField<String>,
}

impl HeroPatch {
    pub fn apply(self, hero: &mut HeroData) {
        if let Some(name) = self.name {
            hero.name = name;
        }
        if let Some(title) = self.title {
            hero.title = title;
        }
        if let Some(description) = self.description {
            hero.description = description;
        }
        if let Some(cta_text) = self.cta_text {
            hero.cta_text = cta_text;
        }
        if let Some(cta_link) = self.cta_link {
            hero.cta_link = cta_link;
        }
        self.image.apply_to_option(&mut hero.image);
        self.resume_url.apply_to_option(&mut hero.resume_url);
    }
}
