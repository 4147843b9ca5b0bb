use actix_web::{get, patch, post, web, HttpResponse, Responder};

use crate::modules::hero::domain::entities::HeroPatch;
use crate::shared::api::ApiResponse;
use crate::shared::remote::RemoteError;
use crate::AppState;

fn remote_failure(err: &RemoteError) -> HttpResponse {
    ApiResponse::bad_gateway("HERO_REMOTE_ERROR", &format!("Failed to save hero: {err}"))
}

#[get("/api/hero")]
pub async fn get_hero_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.hero.state())
}

#[post("/api/hero/refresh")]
pub async fn refresh_hero_handler(data: web::Data<AppState>) -> impl Responder {
    // A failed refresh still answers with the fallback state; the error is in it.
    let _ = data.hero.fetch().await;
    ApiResponse::success(data.hero.state())
}

#[patch("/api/hero")]
pub async fn patch_hero_handler(
    req: web::Json<HeroPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = req.into_inner();
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty");
    }

    match data.hero.update(patch).await {
        Ok(hero) => ApiResponse::success(hero),
        Err(err) => remote_failure(&err),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_hero_handler)
        .service(refresh_hero_handler)
        .service(patch_hero_handler);
}
