use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::skill::application::views::{filter_skills, grouped, sorted_categories};
use crate::modules::skill::domain::entities::{
    CategoryPatch, NewCategory, NewSkill, SkillCategory, SkillPatch, MAX_LEVEL,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::shared::view::Selection;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListSkillsQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub category: Selection,
}

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub level: u16,
    pub category: String,
    pub icon: Option<String>,
    pub year: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct PatchSkillRequest {
    pub name: Option<String>,
    pub level: Option<u16>,
    pub category: Option<String>,
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(default)]
    pub year: PatchField<u16>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub struct PatchCategoryRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillInputError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Level must be between 0 and {max}, got {0}", max = MAX_LEVEL)]
    LevelOutOfRange(u16),
}

impl SkillInputError {
    fn code(&self) -> &'static str {
        match self {
            SkillInputError::EmptyName => "EMPTY_NAME",
            SkillInputError::EmptyCategory => "EMPTY_CATEGORY",
            SkillInputError::LevelOutOfRange(_) => "LEVEL_OUT_OF_RANGE",
        }
    }
}

fn non_empty(value: String, err: SkillInputError) -> Result<String, SkillInputError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(err)
    } else {
        Ok(value)
    }
}

fn level(raw: u16) -> Result<u8, SkillInputError> {
    u8::try_from(raw)
        .ok()
        .filter(|level| *level <= MAX_LEVEL)
        .ok_or(SkillInputError::LevelOutOfRange(raw))
}

impl TryFrom<CreateSkillRequest> for NewSkill {
    type Error = SkillInputError;

    fn try_from(req: CreateSkillRequest) -> Result<Self, Self::Error> {
        Ok(NewSkill {
            name: non_empty(req.name, SkillInputError::EmptyName)?,
            level: level(req.level)?,
            category: non_empty(req.category, SkillInputError::EmptyCategory)?,
            icon: req.icon,
            year: req.year,
        })
    }
}

impl TryFrom<PatchSkillRequest> for SkillPatch {
    type Error = SkillInputError;

    fn try_from(req: PatchSkillRequest) -> Result<Self, Self::Error> {
        Ok(SkillPatch {
            name: req
                .name
                .map(|n| non_empty(n, SkillInputError::EmptyName))
                .transpose()?,
            level: req.level.map(level).transpose()?,
            category: req
                .category
                .map(|c| non_empty(c, SkillInputError::EmptyCategory))
                .transpose()?,
            icon: req.icon,
            year: req.year,
        })
    }
}

impl TryFrom<CreateCategoryRequest> for NewCategory {
    type Error = SkillInputError;

    fn try_from(req: CreateCategoryRequest) -> Result<Self, Self::Error> {
        Ok(NewCategory {
            name: non_empty(req.name, SkillInputError::EmptyName)?,
            description: req.description,
            order: req.order,
        })
    }
}

impl TryFrom<PatchCategoryRequest> for CategoryPatch {
    type Error = SkillInputError;

    fn try_from(req: PatchCategoryRequest) -> Result<Self, Self::Error> {
        Ok(CategoryPatch {
            name: req
                .name
                .map(|n| non_empty(n, SkillInputError::EmptyName))
                .transpose()?,
            description: req.description,
            order: req.order,
        })
    }
}

fn invalid(err: SkillInputError) -> HttpResponse {
    ApiResponse::bad_request(err.code(), &err.to_string())
}

fn skill_not_found() -> HttpResponse {
    ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
}

fn category_not_found() -> HttpResponse {
    ApiResponse::not_found("CATEGORY_NOT_FOUND", "Skill category not found")
}

// ── skills ──────────────────────────────────────────────────

#[get("/api/skills")]
pub async fn list_skills_handler(
    query: web::Query<ListSkillsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let term = query.search.unwrap_or_default();
    let skills = data.skills.read(|s| {
        filter_skills(&s.skills, &term, &query.category)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    ApiResponse::success(skills)
}

#[get("/api/skills/grouped")]
pub async fn grouped_skills_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.skills.read(grouped))
}

#[get("/api/skills/{skill_id}")]
pub async fn get_skill_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.get_skill(&path.into_inner()) {
        Some(skill) => ApiResponse::success(skill),
        None => skill_not_found(),
    }
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match NewSkill::try_from(req.into_inner()) {
        Ok(new_skill) => ApiResponse::created(data.skills.add_skill(new_skill)),
        Err(err) => invalid(err),
    }
}

#[patch("/api/skills/{skill_id}")]
pub async fn patch_skill_handler(
    path: web::Path<String>,
    req: web::Json<PatchSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = match SkillPatch::try_from(req.into_inner()) {
        Ok(patch) => patch,
        Err(err) => return invalid(err),
    };

    match data.skills.update_skill(&path.into_inner(), patch) {
        Some(skill) => ApiResponse::success(skill),
        None => skill_not_found(),
    }
}

#[delete("/api/skills/{skill_id}")]
pub async fn delete_skill_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.skills.delete_skill(&path.into_inner()) {
        ApiResponse::no_content()
    } else {
        skill_not_found()
    }
}

#[post("/api/skills/reset")]
pub async fn reset_skills_handler(data: web::Data<AppState>) -> impl Responder {
    data.skills.reset();
    ApiResponse::success(data.skills.snapshot())
}

// ── categories ──────────────────────────────────────────────

#[get("/api/skill-categories")]
pub async fn list_categories_handler(data: web::Data<AppState>) -> impl Responder {
    let categories: Vec<SkillCategory> = data.skills.read(|s| {
        sorted_categories(&s.categories)
            .into_iter()
            .cloned()
            .collect()
    });
    ApiResponse::success(categories)
}

#[post("/api/skill-categories")]
pub async fn create_category_handler(
    req: web::Json<CreateCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match NewCategory::try_from(req.into_inner()) {
        Ok(new_category) => ApiResponse::created(data.skills.add_category(new_category)),
        Err(err) => invalid(err),
    }
}

#[patch("/api/skill-categories/{category_id}")]
pub async fn patch_category_handler(
    path: web::Path<String>,
    req: web::Json<PatchCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = match CategoryPatch::try_from(req.into_inner()) {
        Ok(patch) => patch,
        Err(err) => return invalid(err),
    };

    match data.skills.update_category(&path.into_inner(), patch) {
        Some(category) => ApiResponse::success(category),
        None => category_not_found(),
    }
}

#[delete("/api/skill-categories/{category_id}")]
pub async fn delete_category_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.skills.delete_category(&path.into_inner()) {
        ApiResponse::no_content()
    } else {
        category_not_found()
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(grouped_skills_handler)
        .service(reset_skills_handler)
        .service(list_skills_handler)
        .service(get_skill_handler)
        .service(create_skill_handler)
        .service(patch_skill_handler)
        .service(delete_skill_handler)
        .service(list_categories_handler)
        .service(create_category_handler)
        .service(patch_category_handler)
        .service(delete_category_handler);
}
