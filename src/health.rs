use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::shared::remote::RemoteError;
use crate::AppState;

/// Key written by the preferences store; probing it exercises the storage read path.
const STORAGE_PROBE_KEY: &str = "portfolio-ui";
const REMOTE_PROBE_TABLE: &str = "hero";

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    storage: &'static str,
    remote: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Storage must be readable
/// - Remote status is reported but never fails readiness; stores fall back to defaults
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let storage_status = match data.storage.contains(STORAGE_PROBE_KEY) {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    let remote_status = match data.remote.select_single(REMOTE_PROBE_TABLE).await {
        Ok(_) => "ok",
        Err(RemoteError::NotConfigured) => "not_configured",
        Err(_) => "unreachable",
    };

    if storage_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: storage_status,
            remote: remote_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            storage: storage_status,
            remote: remote_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{BrokenStorage, StubRemote};

    #[actix_web::test]
    async fn test_health_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"status": "ok"}));
    }

    #[actix_web::test]
    async fn test_ready_without_remote() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["storage"], "ok");
        assert_eq!(body["remote"], "not_configured");
    }

    #[actix_web::test]
    async fn test_ready_reports_unreachable_remote() {
        let remote = StubRemote::new();
        remote.fail_with(RemoteError::Network("timeout".to_string()));
        let state = TestAppStateBuilder::default()
            .with_remote(Arc::new(remote))
            .build();
        let app = test::init_service(App::new().app_data(state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["remote"], "unreachable");
    }

    #[actix_web::test]
    async fn test_ready_is_unavailable_when_storage_fails() {
        let state = TestAppStateBuilder::default()
            .with_storage(Arc::new(BrokenStorage))
            .build();
        let app = test::init_service(App::new().app_data(state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["storage"], "unhealthy");
    }
}
