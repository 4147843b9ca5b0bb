// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, QueryConfig};

/// Malformed JSON bodies answer with the standard error envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_BODY", &message),
        )
        .into()
    })
}

/// Unparseable query strings (e.g. `page=abc`) likewise.
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_QUERY", &message),
        )
        .into()
    })
}
