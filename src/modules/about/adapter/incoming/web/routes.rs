use actix_web::{get, patch, post, web, Responder};

use crate::modules::about::domain::entities::AboutPatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.about.state())
}

#[post("/api/about/refresh")]
pub async fn refresh_about_handler(data: web::Data<AppState>) -> impl Responder {
    let _ = data.about.fetch().await;
    ApiResponse::success(data.about.state())
}

#[patch("/api/about")]
pub async fn patch_about_handler(
    req: web::Json<AboutPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut patch = req.into_inner();
    if let Some(bio) = patch.bio.take() {
        patch.bio = Some(
            bio.into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        );
    }

    match data.about.update(patch).await {
        Ok(about) => ApiResponse::success(about),
        Err(err) => ApiResponse::bad_gateway(
            "ABOUT_REMOTE_ERROR",
            &format!("Failed to save about: {err}"),
        ),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_about_handler)
        .service(refresh_about_handler)
        .service(patch_about_handler);
}
