use actix_web::{get, patch, post, web, Responder};

use crate::modules::resume::domain::entities::ResumePatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.resume.state())
}

#[post("/api/resume/refresh")]
pub async fn refresh_resume_handler(data: web::Data<AppState>) -> impl Responder {
    let _ = data.resume.fetch().await;
    ApiResponse::success(data.resume.state())
}

#[patch("/api/resume")]
pub async fn patch_resume_handler(
    req: web::Json<ResumePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = req.into_inner();
    let bad_education = patch.education.as_ref().is_some_and(|entries| {
        entries
            .iter()
            .any(|e| e.end_year.is_some_and(|end| end < e.start_year))
    });
    if bad_education {
        return ApiResponse::bad_request(
            "INVALID_EDUCATION_YEARS",
            "Education end year cannot be before its start year",
        );
    }

    match data.resume.update(patch).await {
        Ok(resume) => ApiResponse::success(resume),
        Err(err) => ApiResponse::bad_gateway(
            "RESUME_REMOTE_ERROR",
            &format!("Failed to save resume: {err}"),
        ),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_resume_handler)
        .service(refresh_resume_handler)
        .service(patch_resume_handler);
}
