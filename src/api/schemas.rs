use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for read endpoints and sign-in.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for failures outside the form actions.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "INVALID_CREDENTIALS")]
    pub code: String,

    #[schema(example = "Invalid email or password")]
    pub message: String,
}
