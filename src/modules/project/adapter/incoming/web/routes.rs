use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::project::application::views::{list_projects, ProjectQuery};
use crate::modules::project::domain::entities::{CaseStudy, NewProject, ProjectPatch};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::shared::view::{Selection, DEFAULT_PAGE_SIZE};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub technology: Selection,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub per_page: usize,
}

impl From<ListProjectsQuery> for ProjectQuery {
    fn from(q: ListProjectsQuery) -> Self {
        ProjectQuery {
            search: q.search.unwrap_or_default(),
            technology: q.technology,
            featured_only: q.featured,
            page: if q.page == 0 { 1 } else { q.page },
            per_page: if q.per_page == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                q.per_page
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub video_url: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    pub case_study: Option<CaseStudy>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub repo_url: PatchField<String>,
    #[serde(default)]
    pub live_url: PatchField<String>,
    #[serde(default)]
    pub video_url: PatchField<String>,
    #[serde(default)]
    pub image: PatchField<String>,
    #[serde(default)]
    pub icon: PatchField<String>,
    pub screenshots: Option<Vec<String>>,
    #[serde(default)]
    pub case_study: PatchField<CaseStudy>,
    pub featured: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectInputError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("At least one technology is required")]
    NoTechnologies,
}

impl ProjectInputError {
    fn code(&self) -> &'static str {
        match self {
            ProjectInputError::EmptyTitle => "EMPTY_TITLE",
            ProjectInputError::NoTechnologies => "NO_TECHNOLOGIES",
        }
    }
}

fn clean_technologies(technologies: Vec<String>) -> Result<Vec<String>, ProjectInputError> {
    let cleaned: Vec<String> = technologies
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(ProjectInputError::NoTechnologies);
    }
    Ok(cleaned)
}

fn clean_title(title: String) -> Result<String, ProjectInputError> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ProjectInputError::EmptyTitle);
    }
    Ok(title)
}

impl TryFrom<CreateProjectRequest> for NewProject {
    type Error = ProjectInputError;

    fn try_from(req: CreateProjectRequest) -> Result<Self, Self::Error> {
        Ok(NewProject {
            title: clean_title(req.title)?,
            description: req.description,
            technologies: clean_technologies(req.technologies)?,
            repo_url: req.repo_url,
            live_url: req.live_url,
            video_url: req.video_url,
            image: req.image,
            icon: req.icon,
            screenshots: req.screenshots,
            case_study: req.case_study,
            featured: req.featured,
        })
    }
}

impl TryFrom<PatchProjectRequest> for ProjectPatch {
    type Error = ProjectInputError;

    fn try_from(req: PatchProjectRequest) -> Result<Self, Self::Error> {
        Ok(ProjectPatch {
            title: req.title.map(clean_title).transpose()?,
            description: req.description,
            technologies: req.technologies.map(clean_technologies).transpose()?,
            repo_url: req.repo_url,
            live_url: req.live_url,
            video_url: req.video_url,
            image: req.image,
            icon: req.icon,
            screenshots: req.screenshots,
            case_study: req.case_study,
            featured: req.featured,
        })
    }
}

fn invalid(err: ProjectInputError) -> HttpResponse {
    ApiResponse::bad_request(err.code(), &err.to_string())
}

fn not_found() -> HttpResponse {
    ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/projects")]
pub async fn list_projects_handler(
    query: web::Query<ListProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query: ProjectQuery = query.into_inner().into();
    let page = data.projects.read(|projects| list_projects(projects, &query));
    ApiResponse::success(page)
}

#[get("/api/projects/technologies")]
pub async fn list_technologies_handler(data: web::Data<AppState>) -> impl Responder {
    let mut view = data.technologies.lock().await;
    ApiResponse::success(view.get().clone())
}

#[get("/api/projects/{project_id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.get_by_id(&path.into_inner()) {
        Some(project) => ApiResponse::success(project),
        None => not_found(),
    }
}

#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match NewProject::try_from(req.into_inner()) {
        Ok(new_project) => ApiResponse::created(data.projects.add(new_project)),
        Err(err) => invalid(err),
    }
}

#[patch("/api/projects/{project_id}")]
pub async fn patch_project_handler(
    path: web::Path<String>,
    req: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = match ProjectPatch::try_from(req.into_inner()) {
        Ok(patch) => patch,
        Err(err) => return invalid(err),
    };

    match data.projects.update(&path.into_inner(), patch) {
        Some(updated) => ApiResponse::success(updated),
        None => not_found(),
    }
}

#[delete("/api/projects/{project_id}")]
pub async fn delete_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.projects.delete(&path.into_inner()) {
        ApiResponse::no_content()
    } else {
        not_found()
    }
}

#[post("/api/projects/reset")]
pub async fn reset_projects_handler(data: web::Data<AppState>) -> impl Responder {
    data.projects.reset();
    ApiResponse::success(data.projects.all())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Literal paths before `{project_id}`.
    cfg.service(list_technologies_handler)
        .service(reset_projects_handler)
        .service(list_projects_handler)
        .service(get_project_handler)
        .service(create_project_handler)
        .service(patch_project_handler)
        .service(delete_project_handler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_list_projects_paginates_and_filters() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects?technology=Rust&per_page=1&page=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["page"], 2);
        assert_eq!(body["data"]["perPage"], 1);
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["items"][0]["id"], "4");
    }

    #[actix_web::test]
    async fn test_list_projects_all_sentinel_and_search() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects?technology=all&search=recipe")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["items"][0]["title"], "Recipe Finder");
    }

    #[actix_web::test]
    async fn test_get_project_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects/does-not-exist")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_create_project_success_and_technology_index_updates() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({
                "title": "  Weather CLI ",
                "description": "Forecasts in the terminal",
                "technologies": ["Zig", " "],
                "repoUrl": "https://github.com/x/weather"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Weather CLI");
        assert_eq!(body["data"]["technologies"], json!(["Zig"]));
        assert!(!body["data"]["id"].as_str().unwrap().is_empty());

        let req = test::TestRequest::get()
            .uri("/api/projects/technologies")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|t| t == "Zig"));
    }

    #[actix_web::test]
    async fn test_create_project_requires_technology() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({"title": "No stack", "technologies": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NO_TECHNOLOGIES");
    }

    #[actix_web::test]
    async fn test_patch_project_clears_link_and_keeps_rest() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::patch()
            .uri("/api/projects/3")
            .set_json(json!({"liveUrl": null, "featured": true}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"].get("liveUrl").is_none());
        assert_eq!(body["data"]["featured"], true);
        assert_eq!(body["data"]["title"], "Recipe Finder");
        assert_eq!(
            body["data"]["repoUrl"],
            "https://github.com/example/recipe-finder"
        );
    }

    #[actix_web::test]
    async fn test_patch_project_rejects_blank_title() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::patch()
            .uri("/api/projects/1")
            .set_json(json!({"title": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_then_reset() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::delete().uri("/api/projects/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/api/projects/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/projects/reset")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 4);
        assert_eq!(body["data"][0]["id"], "1");
    }
}
