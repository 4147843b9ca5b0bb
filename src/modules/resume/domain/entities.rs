use serde::{Deserialize, Serialize};

use crate::shared::patch::PatchField;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    /// `None` for the current position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub start_year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<u16>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            summary: "Full-stack developer with eight years of experience shipping \
                      customer-facing products."
                .to_string(),
            download_url: Some("/files/resume.pdf".to_string()),
            experience: vec![
                Experience {
                    company: "Northwind Labs".to_string(),
                    position: "Senior Software Engineer".to_string(),
                    location: Some("Remote".to_string()),
                    start_date: "2021-03".to_string(),
                    end_date: None,
                    description: "Lead engineer for the billing platform.".to_string(),
                    achievements: vec![
                        "Cut invoice generation time from minutes to seconds".to_string(),
                        "Introduced contract tests across six services".to_string(),
                    ],
                },
                Experience {
                    company: "Brightside Agency".to_string(),
                    position: "Web Developer".to_string(),
                    location: Some("Lisbon".to_string()),
                    start_date: "2016-06".to_string(),
                    end_date: Some("2021-02".to_string()),
                    description: "Built marketing sites and e-commerce storefronts."
                        .to_string(),
                    achievements: vec!["Delivered 40+ client projects".to_string()],
                },
            ],
            education: vec![Education {
                institution: "University of Porto".to_string(),
                degree: "BSc".to_string(),
                field: Some("Computer Science".to_string()),
                start_year: 2012,
                end_year: Some(2016),
            }],
            certifications: vec![Certification {
                name: "AWS Certified Developer".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: "2022-09".to_string(),
                url: None,
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePatch {
    pub summary: Option<String>,
    #[serde(default)]
    pub download_url: PatchField<String>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub certifications: Option<Vec<Certification>>,
}

impl ResumePatch {
    pub fn apply(self, resume: &mut ResumeData) {
        if let Some(summary) = self.summary {
            resume.summary = summary;
        }
        self.download_url.apply_to_option(&mut resume.download_url);
        if let Some(experience) = self.experience {
            resume.experience = experience;
        }
        if let Some(education) = self.education {
            resume.education = education;
        }
        if let Some(certifications) = self.certifications {
            resume.certifications = certifications;
        }
    }
}
