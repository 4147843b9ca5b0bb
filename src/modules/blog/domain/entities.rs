use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::patch::PatchField;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A post published elsewhere and only linked to. Never authored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalBlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub date: NaiveDate,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

impl NewBlogPost {
    pub fn into_post(self, id: String, slug: String) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            slug,
            excerpt: self.excerpt,
            content: self.content,
            date: self.date,
            author: self.author,
            tags: self.tags,
        }
    }
}

/// The slug is not patchable directly; it follows the title.
#[derive(Debug, Clone, Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub date: Option<NaiveDate>,
    pub author: PatchField<String>,
    pub tags: Option<Vec<String>>,
}

impl BlogPostPatch {
    pub fn apply(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(date) = self.date {
            post.date = date;
        }
        self.author.apply_to_option(&mut post.author);
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_serializes_as_iso_day() {
        let post = NewBlogPost {
            title: "T".to_string(),
            excerpt: "E".to_string(),
            content: "C".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            author: None,
            tags: vec![],
        }
        .into_post("1".to_string(), "t".to_string());

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert!(json.get("author").is_none());
    }

    #[test]
    fn patch_does_not_touch_slug() {
        let mut post = BlogPost {
            id: "1".to_string(),
            title: "Old".to_string(),
            slug: "old".to_string(),
            excerpt: String::new(),
            content: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            author: Some("me".to_string()),
            tags: vec![],
        };

        BlogPostPatch {
            title: Some("New".to_string()),
            author: PatchField::Null,
            ..Default::default()
        }
        .apply(&mut post);

        assert_eq!(post.title, "New");
        assert_eq!(post.slug, "old");
        assert_eq!(post.author, None);
    }
}
