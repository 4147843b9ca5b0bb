use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::modules::blog::application::views::{
    all_tags, external_newest_first, list_posts, BlogQuery,
};
use crate::modules::blog::domain::entities::{BlogPostPatch, NewBlogPost};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::shared::view::{Selection, DEFAULT_PAGE_SIZE};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub tag: Selection,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub per_page: usize,
}

impl From<ListPostsQuery> for BlogQuery {
    fn from(q: ListPostsQuery) -> Self {
        BlogQuery {
            search: q.search.unwrap_or_default(),
            tag: q.tag,
            page: q.page.max(1),
            per_page: if q.per_page == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                q.per_page
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    /// Defaults to today (UTC).
    pub date: Option<NaiveDate>,
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PatchPostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub author: PatchField<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogInputError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Content cannot be empty")]
    EmptyContent,
}

impl BlogInputError {
    fn code(&self) -> &'static str {
        match self {
            BlogInputError::EmptyTitle => "EMPTY_TITLE",
            BlogInputError::EmptyContent => "EMPTY_CONTENT",
        }
    }
}

fn required(value: String, err: BlogInputError) -> Result<String, BlogInputError> {
    if value.trim().is_empty() {
        Err(err)
    } else {
        Ok(value.trim().to_string())
    }
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !cleaned.contains(&tag) {
            cleaned.push(tag);
        }
    }
    cleaned
}

impl TryFrom<CreatePostRequest> for NewBlogPost {
    type Error = BlogInputError;

    fn try_from(req: CreatePostRequest) -> Result<Self, Self::Error> {
        Ok(NewBlogPost {
            title: required(req.title, BlogInputError::EmptyTitle)?,
            excerpt: req.excerpt,
            content: required(req.content, BlogInputError::EmptyContent)?,
            date: req.date.unwrap_or_else(|| Utc::now().date_naive()),
            author: req.author,
            tags: clean_tags(req.tags),
        })
    }
}

impl TryFrom<PatchPostRequest> for BlogPostPatch {
    type Error = BlogInputError;

    fn try_from(req: PatchPostRequest) -> Result<Self, Self::Error> {
        Ok(BlogPostPatch {
            title: req
                .title
                .map(|t| required(t, BlogInputError::EmptyTitle))
                .transpose()?,
            excerpt: req.excerpt,
            content: req
                .content
                .map(|c| required(c, BlogInputError::EmptyContent))
                .transpose()?,
            date: req.date,
            author: req.author,
            tags: req.tags.map(clean_tags),
        })
    }
}

fn invalid(err: BlogInputError) -> HttpResponse {
    ApiResponse::bad_request(err.code(), &err.to_string())
}

fn not_found() -> HttpResponse {
    ApiResponse::not_found("POST_NOT_FOUND", "Blog post not found")
}

#[get("/api/blog/posts")]
pub async fn list_posts_handler(
    query: web::Query<ListPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query: BlogQuery = query.into_inner().into();
    ApiResponse::success(data.blog.read(|s| list_posts(&s.posts, &query)))
}

#[get("/api/blog/posts/{post_id}")]
pub async fn get_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.get_by_id(&path.into_inner()) {
        Some(post) => ApiResponse::success(post),
        None => not_found(),
    }
}

#[get("/api/blog/slug/{slug}")]
pub async fn get_post_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.get_by_slug(&path.into_inner()) {
        Some(post) => ApiResponse::success(post),
        None => not_found(),
    }
}

#[get("/api/blog/tags")]
pub async fn list_tags_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog.read(all_tags))
}

#[get("/api/blog/external")]
pub async fn list_external_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(external_newest_first(&data.blog.external_posts()))
}

#[post("/api/blog/posts")]
pub async fn create_post_handler(
    req: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match NewBlogPost::try_from(req.into_inner()) {
        Ok(new_post) => ApiResponse::created(data.blog.add(new_post)),
        Err(err) => invalid(err),
    }
}

#[patch("/api/blog/posts/{post_id}")]
pub async fn patch_post_handler(
    path: web::Path<String>,
    req: web::Json<PatchPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = match BlogPostPatch::try_from(req.into_inner()) {
        Ok(patch) => patch,
        Err(err) => return invalid(err),
    };

    match data.blog.update(&path.into_inner(), patch) {
        Some(post) => ApiResponse::success(post),
        None => not_found(),
    }
}

#[delete("/api/blog/posts/{post_id}")]
pub async fn delete_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.blog.delete(&path.into_inner()) {
        ApiResponse::no_content()
    } else {
        not_found()
    }
}

#[post("/api/blog/reset")]
pub async fn reset_blog_handler(data: web::Data<AppState>) -> impl Responder {
    data.blog.reset();
    ApiResponse::success(data.blog.posts())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_posts_handler)
        .service(get_post_handler)
        .service(get_post_by_slug_handler)
        .service(list_tags_handler)
        .service(list_external_handler)
        .service(create_post_handler)
        .service(patch_post_handler)
        .service(delete_post_handler)
        .service(reset_blog_handler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_list_posts_newest_first() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/blog/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["total"], 3);
        assert_eq!(body["data"]["items"][0]["id"], "1");
        assert_eq!(body["data"]["items"][2]["id"], "3");
    }

    #[actix_web::test]
    async fn test_list_posts_by_tag() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/blog/posts?tag=ux")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["items"][0]["id"], "2");
    }

    #[actix_web::test]
    async fn test_create_post_and_fetch_by_slug() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/blog/posts")
            .set_json(json!({
                "title": "Optimistic Updates Without Tears",
                "content": "Part two",
                "date": "2024-07-01",
                "tags": ["State", "state", " "]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: Value = test::read_body_json(resp).await;
        assert_eq!(
            created["data"]["slug"],
            "optimistic-updates-without-tears-2"
        );
        assert_eq!(created["data"]["tags"], json!(["state"]));

        let req = test::TestRequest::get()
            .uri("/api/blog/slug/optimistic-updates-without-tears-2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["content"], "Part two");
    }

    #[actix_web::test]
    async fn test_create_post_requires_content() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/blog/posts")
            .set_json(json!({"title": "Empty", "content": "  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_CONTENT");
    }

    #[actix_web::test]
    async fn test_patch_title_moves_slug() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::patch()
            .uri("/api/blog/posts/3")
            .set_json(json!({"title": "Paging, Revisited"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["slug"], "paging-revisited");

        let req = test::TestRequest::get()
            .uri("/api/blog/slug/pagination-edge-cases")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_external_posts_are_listed() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/blog/external").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["source"], "dev.to");
    }

    #[actix_web::test]
    async fn test_delete_unknown_post_is_404() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::delete()
            .uri("/api/blog/posts/missing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
