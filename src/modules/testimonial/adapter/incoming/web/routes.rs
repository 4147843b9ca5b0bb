use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::testimonial::application::views::{ordered, rated_at_least};
use crate::modules::testimonial::domain::entities::{
    NewTestimonial, Testimonial, TestimonialPatch, MAX_RATING,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::shared::remote::{DataSource, LoadStatus, RemoteError};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTestimonialsQuery {
    pub min_rating: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTestimonialRequest {
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    pub avatar: Option<String>,
    pub rating: Option<u8>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub struct PatchTestimonialRequest {
    pub content: Option<String>,
    pub author: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub avatar: PatchField<String>,
    #[serde(default)]
    pub rating: PatchField<u8>,
    pub order: Option<i32>,
}

/// List response: the ordered testimonials plus where they came from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsView {
    pub items: Vec<Testimonial>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status: LoadStatus,
    pub source: DataSource,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestimonialInputError {
    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Author cannot be empty")]
    EmptyAuthor,

    #[error("Rating must be between 1 and {max}", max = MAX_RATING)]
    RatingOutOfRange,
}

impl TestimonialInputError {
    fn code(&self) -> &'static str {
        match self {
            TestimonialInputError::EmptyContent => "EMPTY_CONTENT",
            TestimonialInputError::EmptyAuthor => "EMPTY_AUTHOR",
            TestimonialInputError::RatingOutOfRange => "RATING_OUT_OF_RANGE",
        }
    }
}

fn required(value: String, err: TestimonialInputError) -> Result<String, TestimonialInputError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(err)
    } else {
        Ok(value)
    }
}

fn check_rating(rating: u8) -> Result<u8, TestimonialInputError> {
    if (1..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(TestimonialInputError::RatingOutOfRange)
    }
}

impl TryFrom<CreateTestimonialRequest> for NewTestimonial {
    type Error = TestimonialInputError;

    fn try_from(req: CreateTestimonialRequest) -> Result<Self, Self::Error> {
        Ok(NewTestimonial {
            content: required(req.content, TestimonialInputError::EmptyContent)?,
            author: required(req.author, TestimonialInputError::EmptyAuthor)?,
            position: req.position,
            company: req.company,
            avatar: req.avatar,
            rating: req.rating.map(check_rating).transpose()?,
            order: req.order,
        })
    }
}

impl TryFrom<PatchTestimonialRequest> for TestimonialPatch {
    type Error = TestimonialInputError;

    fn try_from(req: PatchTestimonialRequest) -> Result<Self, Self::Error> {
        if let Some(rating) = req.rating.as_value() {
            check_rating(*rating)?;
        }
        Ok(TestimonialPatch {
            content: req
                .content
                .map(|c| required(c, TestimonialInputError::EmptyContent))
                .transpose()?,
            author: req
                .author
                .map(|a| required(a, TestimonialInputError::EmptyAuthor))
                .transpose()?,
            position: req.position,
            company: req.company,
            avatar: req.avatar,
            rating: req.rating,
            order: req.order,
        })
    }
}

fn invalid(err: TestimonialInputError) -> HttpResponse {
    ApiResponse::bad_request(err.code(), &err.to_string())
}

fn not_found() -> HttpResponse {
    ApiResponse::not_found("TESTIMONIAL_NOT_FOUND", "Testimonial not found")
}

fn remote_failure(action: &str, err: &RemoteError) -> HttpResponse {
    ApiResponse::bad_gateway(
        "TESTIMONIAL_REMOTE_ERROR",
        &format!("Failed to {action} testimonial: {err}"),
    )
}

#[get("/api/testimonials")]
pub async fn list_testimonials_handler(
    query: web::Query<ListTestimonialsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let state = data.testimonials.state();
    let items = match query.min_rating {
        Some(min) => rated_at_least(&state.data, min),
        None => ordered(&state.data),
    };

    ApiResponse::success(TestimonialsView {
        items,
        is_loading: state.is_loading,
        error: state.error,
        status: state.status,
        source: state.source,
    })
}

#[get("/api/testimonials/{testimonial_id}")]
pub async fn get_testimonial_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonials.get_by_id(&path.into_inner()) {
        Some(t) => ApiResponse::success(t),
        None => not_found(),
    }
}

#[post("/api/testimonials/refresh")]
pub async fn refresh_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    let _ = data.testimonials.fetch().await;
    ApiResponse::success(data.testimonials.state())
}

#[post("/api/testimonials")]
pub async fn create_testimonial_handler(
    req: web::Json<CreateTestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let new_testimonial = match NewTestimonial::try_from(req.into_inner()) {
        Ok(t) => t,
        Err(err) => return invalid(err),
    };

    match data.testimonials.add(new_testimonial).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => remote_failure("add", &err),
    }
}

#[patch("/api/testimonials/{testimonial_id}")]
pub async fn patch_testimonial_handler(
    path: web::Path<String>,
    req: web::Json<PatchTestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = match TestimonialPatch::try_from(req.into_inner()) {
        Ok(patch) => patch,
        Err(err) => return invalid(err),
    };

    match data.testimonials.update(&path.into_inner(), patch).await {
        Ok(Some(updated)) => ApiResponse::success(updated),
        Ok(None) => not_found(),
        Err(err) => remote_failure("update", &err),
    }
}

#[delete("/api/testimonials/{testimonial_id}")]
pub async fn delete_testimonial_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonials.delete(&path.into_inner()).await {
        Ok(true) => ApiResponse::no_content(),
        Ok(false) => not_found(),
        Err(err) => remote_failure("delete", &err),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(refresh_testimonials_handler)
        .service(list_testimonials_handler)
        .service(get_testimonial_handler)
        .service(create_testimonial_handler)
        .service(patch_testimonial_handler)
        .service(delete_testimonial_handler);
}
