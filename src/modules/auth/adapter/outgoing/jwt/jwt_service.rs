use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: ACCESS.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::InvalidIssuer
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        if decoded.claims.token_type != ACCESS {
            tracing::warn!(
                "Token type mismatch: expected 'access', got '{}'",
                decoded.claims.token_type
            );
            return Err(TokenError::InvalidTokenType(ACCESS.to_string()));
        }

        Ok(decoded.claims)
    }

    fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_for_testing_purposes_only";

    fn service_with(issuer: &str, secret: &str) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: secret.to_string(),
            issuer: issuer.to_string(),
            access_token_expiry: 3600,
        })
    }

    fn encode_claims(claims: &TokenClaims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("Should encode token")
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service_with("portfolio", SECRET);
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id)
            .expect("Token should be generated");

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "portfolio");
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = service_with("portfolio", SECRET);

        let result = service.verify_access_token("invalid.jwt.token");

        assert!(matches!(result.unwrap_err(), TokenError::MalformedToken));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = service_with("portfolio", "another_secret_key_that_is_long_enough!!");
        let token = other.generate_access_token(Uuid::new_v4()).unwrap();

        let result = service_with("portfolio", SECRET).verify_access_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::InvalidSignature));
    }

    #[test]
    fn test_token_from_other_issuer_is_rejected() {
        let other = service_with("someone-else", SECRET);
        let token = other.generate_access_token(Uuid::new_v4()).unwrap();

        let result = service_with("portfolio", SECRET).verify_access_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::InvalidIssuer));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now();
        let token = encode_claims(&TokenClaims {
            sub: Uuid::new_v4(),
            iss: "portfolio".to_string(),
            exp: (now - Duration::seconds(120)).timestamp(),
            iat: (now - Duration::seconds(3720)).timestamp(),
            nbf: (now - Duration::seconds(3720)).timestamp(),
            token_type: "access".to_string(),
        });

        let result = service_with("portfolio", SECRET).verify_access_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::TokenExpired));
    }

    #[test]
    fn test_non_access_token_is_rejected() {
        let now = Utc::now();
        let token = encode_claims(&TokenClaims {
            sub: Uuid::new_v4(),
            iss: "portfolio".to_string(),
            exp: (now + Duration::seconds(600)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: "refresh".to_string(),
        });

        let result = service_with("portfolio", SECRET).verify_access_token(&token);

        assert!(matches!(
            result.unwrap_err(),
            TokenError::InvalidTokenType(expected) if expected == "access"
        ));
    }
}
