use actix_web::{get, patch, post, put, web, Responder};
use serde::Deserialize;

use crate::modules::preferences::domain::entities::{Theme, UiPreferencesPatch};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

fn empty_language() -> actix_web::HttpResponse {
    ApiResponse::bad_request("EMPTY_LANGUAGE", "Language cannot be empty")
}

#[get("/api/preferences")]
pub async fn get_preferences_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.preferences.current())
}

#[patch("/api/preferences")]
pub async fn patch_preferences_handler(
    req: web::Json<UiPreferencesPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut patch = req.into_inner();
    if let Some(language) = patch.language.take() {
        let language = language.trim().to_string();
        if language.is_empty() {
            return empty_language();
        }
        patch.language = Some(language);
    }
    ApiResponse::success(data.preferences.update(patch))
}

#[put("/api/preferences/theme")]
pub async fn set_theme_handler(
    req: web::Json<SetThemeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.preferences.set_theme(req.theme))
}

#[post("/api/preferences/theme/toggle")]
pub async fn toggle_theme_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.preferences.toggle_theme())
}

#[put("/api/preferences/language")]
pub async fn set_language_handler(
    req: web::Json<SetLanguageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = req.language.trim();
    if language.is_empty() {
        return empty_language();
    }
    ApiResponse::success(data.preferences.set_language(language))
}

#[post("/api/preferences/sidebar/toggle")]
pub async fn toggle_sidebar_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.preferences.toggle_sidebar())
}

#[post("/api/preferences/reset")]
pub async fn reset_preferences_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.preferences.reset())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_preferences_handler)
        .service(patch_preferences_handler)
        .service(set_theme_handler)
        .service(toggle_theme_handler)
        .service(set_language_handler)
        .service(toggle_sidebar_handler)
        .service(reset_preferences_handler);
}
