use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::sign_in::{SignInError, SignInRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Sign-in request from the admin login form
#[derive(Deserialize, Serialize, ToSchema)]
pub struct SignInRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponseBody {
    /// Bearer token for the Authorization header
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "Bearer")]
    token_type: String,

    /// Seconds until the token expires
    #[schema(example = 3600)]
    expires_in: i64,

    owner: SignedInOwnerDto,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedInOwnerDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "owner@example.com")]
    email: String,

    #[schema(example = "Jane Doe")]
    full_name: String,
}

/// Owner sign in
///
/// Checks email and password against the stored owner account and returns a
/// signed access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = SignInRequestDto,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<SignInResponseBody>)),
        (status = 400, description = "Malformed email or empty password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn sign_in_handler(
    req: web::Json<SignInRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Sign-in attempt");

    let request = match SignInRequest::new(&dto.email, &dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.sign_in_use_case.execute(request).await {
        Ok(response) => {
            info!(owner_id = %response.owner.id, "Owner signed in");

            ApiResponse::success(SignInResponseBody {
                access_token: response.access_token,
                token_type: "Bearer".to_string(),
                expires_in: response.expires_in,
                owner: SignedInOwnerDto {
                    id: response.owner.id.to_string(),
                    email: response.owner.email,
                    full_name: response.owner.full_name,
                },
            })
        }

        Err(SignInError::InvalidCredentials) => {
            warn!("Sign-in failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "Sign-in failed");
            ApiResponse::internal_error()
        }
    }
}
