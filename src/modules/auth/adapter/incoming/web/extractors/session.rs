use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::OwnerSession;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Optional owner session for the current request.
///
/// A missing, malformed or expired bearer token yields `MaybeOwner(None)`;
/// the action decides what that means. The only rejection is a server
/// misconfiguration (no token provider registered).
#[derive(Debug, Clone)]
pub struct MaybeOwner(pub Option<OwnerSession>);

impl MaybeOwner {
    pub fn session(&self) -> Option<&OwnerSession> {
        self.0.as_ref()
    }

    pub fn is_owner(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for MaybeOwner {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("Token provider missing from app data");
                return ready(Err(actix_web::error::InternalError::from_response(
                    "",
                    ApiResponse::internal_error(),
                )
                .into()));
            }
        };

        let session = extract_token_from_header(req).and_then(|token| {
            match token_provider.verify_access_token(&token) {
                Ok(claims) => Some(OwnerSession::new(claims.sub)),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring invalid bearer token");
                    None
                }
            }
        });

        ready(Ok(MaybeOwner(session)))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
