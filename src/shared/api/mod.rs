pub mod action_response;
pub mod json_config;
pub mod response;

pub use action_response::{action_response, form_fields, intro_action_response, FormPayload};
pub use json_config::custom_json_config;
pub use response::ApiResponse;
