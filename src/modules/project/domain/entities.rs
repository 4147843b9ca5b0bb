use serde::{Deserialize, Serialize};

use crate::shared::patch::PatchField;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub challenge: String,
    pub solution: String,
    pub results: String,
    #[serde(default)]
    pub process: Vec<ProcessStep>,
    #[serde(default)]
    pub screenshots: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

/// A project as submitted, before it has an id.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub video_url: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub screenshots: Vec<String>,
    pub case_study: Option<CaseStudy>,
    pub featured: bool,
}

impl NewProject {
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            repo_url: self.repo_url,
            live_url: self.live_url,
            video_url: self.video_url,
            image: self.image,
            icon: self.icon,
            screenshots: self.screenshots,
            case_study: self.case_study,
            featured: self.featured,
        }
    }
}

/// Patch semantics:
/// - title/description/technologies/screenshots/featured: None => keep
/// - links, media and case study: Unset => keep, Null => clear, Value => set
/// - arrays are replaced whole, never merged
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub repo_url: PatchField<String>,
    pub live_url: PatchField<String>,
    pub video_url: PatchField<String>,
    pub image: PatchField<String>,
    pub icon: PatchField<String>,
    pub screenshots: Option<Vec<String>>,
    pub case_study: PatchField<CaseStudy>,
    pub featured: Option<bool>,
}

impl ProjectPatch {
    pub fn apply(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        self.repo_url.apply_to_option(&mut project.repo_url);
        self.live_url.apply_to_option(&mut project.live_url);
        self.video_url.apply_to_option(&mut project.video_url);
        self.image.apply_to_option(&mut project.image);
        self.icon.apply_to_option(&mut project.icon);
        if let Some(screenshots) = self.screenshots {
            project.screenshots = screenshots;
        }
        self.case_study.apply_to_option(&mut project.case_study);
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
    }
}
