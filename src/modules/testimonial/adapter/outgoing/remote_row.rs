use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::testimonial::domain::entities::Testimonial;
use crate::shared::remote::{row_id, RemoteError};

pub const TABLE: &str = "testimonials";
pub const ORDER_COLUMN: &str = "display_order";

/// Column layout of the `testimonials` table, without the id.
#[derive(Debug, Serialize, Deserialize)]
struct TestimonialRow {
    quote: String,
    author_name: String,
    #[serde(default)]
    author_role: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    rating: Option<u8>,
    #[serde(default)]
    display_order: Option<i32>,
}

pub fn from_row(row: Value) -> Result<Testimonial, RemoteError> {
    let id = row_id(&row)?;
    let row: TestimonialRow = serde_json::from_value(row)?;

    Ok(Testimonial {
        id,
        content: row.quote,
        author: row.author_name,
        position: row.author_role.unwrap_or_default(),
        company: row.company.unwrap_or_default(),
        avatar: row.avatar_url.filter(|a| !a.trim().is_empty()),
        rating: row.rating,
        order: row.display_order.unwrap_or_default(),
    })
}

/// Row without an id; the remote side owns the id column.
pub fn to_row(t: &Testimonial) -> Result<Value, RemoteError> {
    let row = TestimonialRow {
        quote: t.content.clone(),
        author_name: t.author.clone(),
        author_role: Some(t.position.clone()),
        company: Some(t.company.clone()),
        avatar_url: t.avatar.clone(),
        rating: t.rating,
        display_order: Some(t.order),
    };
    Ok(serde_json::to_value(row)?)
}
