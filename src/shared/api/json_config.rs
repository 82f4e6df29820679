// src/shared/api/json_config.rs
use actix_web::{error::InternalError, web::JsonConfig};

use crate::shared::api::ApiResponse;

/// Malformed JSON on envelope endpoints (sign-in) gets the `{success, error}` shape.
///
/// Form actions read their body as a `Result` and report parse failures
/// themselves, so this handler's response only reaches non-form routes.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
            .into()
    })
}
