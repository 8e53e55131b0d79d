//! Access token verification and middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use thiserror::Error;

use crate::domain::ports::{FieldValidator, ProductCatalog};
use crate::error::AppError;
use crate::AppState;

type HmacSha256 = Hmac<Sha256>;

/// Authenticated customer, injected into request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub subject: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("not an access token")]
    WrongType,
}

#[derive(Deserialize)]
struct Header {
    alg: String,
}

#[derive(Deserialize)]
struct Claims {
    sub: String,
    exp: Option<i64>,
    #[serde(rename = "type")]
    token_type: Option<String>,
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::Malformed)
}

/// Verify an HS256 access token and return the customer it was issued to
pub fn verify_access_token(token: &str, secret: &str) -> Result<Customer, TokenError> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    let header: Header =
        serde_json::from_slice(&decode_segment(header)?).map_err(|_| TokenError::Malformed)?;
    if header.alg != "HS256" {
        return Err(TokenError::UnsupportedAlgorithm(header.alg));
    }

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| TokenError::InvalidSignature)?;
    mac.update(token[..token.len() - signature.len() - 1].as_bytes());
    mac.verify_slice(&decode_segment(signature)?)
        .map_err(|_| TokenError::InvalidSignature)?;

    let claims: Claims =
        serde_json::from_slice(&decode_segment(payload)?).map_err(|_| TokenError::Malformed)?;

    if let Some(exp) = claims.exp {
        if exp <= chrono::Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
    }

    if claims.token_type.as_deref().is_some_and(|t| t != "access") {
        return Err(TokenError::WrongType);
    }

    Ok(Customer {
        subject: claims.sub,
    })
}

/// Extract the bearer token from the Authorization header
fn extract_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// Verifies the bearer token and injects the `Customer` into request
/// extensions.
pub async fn auth_middleware<FV, PC>(
    State(state): State<AppState<FV, PC>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError>
where
    FV: FieldValidator + 'static,
    PC: ProductCatalog + 'static,
{
    let token = extract_token(&request).ok_or(AppError::Unauthorized)?;

    let customer = verify_access_token(token, &state.config.secret_key).map_err(|e| {
        tracing::warn!(error = %e, "Rejected access token");
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(customer);

    Ok(next.run(request).await)
}
