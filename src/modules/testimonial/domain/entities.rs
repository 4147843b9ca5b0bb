use serde::{Deserialize, Serialize};

use crate::shared::patch::PatchField;

pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub content: String,
    pub author: String,
    pub position: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct NewTestimonial {
    pub content: String,
    pub author: String,
    pub position: String,
    pub company: String,
    pub avatar: Option<String>,
    pub rating: Option<u8>,
    pub order: i32,
}

impl NewTestimonial {
    pub fn into_testimonial(self, id: String) -> Testimonial {
        Testimonial {
            id,
            content: self.content,
            author: self.author,
            position: self.position,
            company: self.company,
            avatar: self.avatar,
            rating: self.rating,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialPatch {
    pub content: Option<String>,
    pub author: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub avatar: PatchField<String>,
    pub rating: PatchField<u8>,
    pub order: Option<i32>,
}

impl TestimonialPatch {
    pub fn apply(self, t: &mut Testimonial) {
        if let Some(content) = self.content {
            t.content = content;
        }
        if let Some(author) = self.author {
            t.author = author;
        }
        if let Some(position) = self.position {
            t.position = position;
        }
        if let Some(company) = self.company {
            t.company = company;
        }
        self.avatar.apply_to_option(&mut t.avatar);
        self.rating.apply_to_option(&mut t.rating);
        if let Some(order) = self.order {
            t.order = order;
        }
    }
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            content: "Alex turned a vague brief into a product our customers love. \
                      Communication was excellent throughout."
                .to_string(),
            author: "Priya Nair".to_string(),
            position: "Head of Product".to_string(),
            company: "Northwind Labs".to_string(),
            avatar: Some("/images/testimonials/priya.jpg".to_string()),
            rating: Some(5),
            order: 1,
        },
        Testimonial {
            id: "2".to_string(),
            content: "Fast, thorough and calm under deadline pressure.".to_string(),
            author: "Tom Becker".to_string(),
            position: "CTO".to_string(),
            company: "Parcelly".to_string(),
            avatar: None,
            rating: Some(5),
            order: 2,
        },
        Testimonial {
            id: "3".to_string(),
            content: "Our site finally loads in under a second on mobile.".to_string(),
            author: "Lena Ortiz".to_string(),
            position: "Marketing Lead".to_string(),
            company: "Brightside Agency".to_string(),
            avatar: None,
            rating: None,
            order: 3,
        },
    ]
}
