//! Unified error types for the checkout service
//!
//! This module defines error types for each layer:
//! - `ValidationError`: field validation client and address validator errors
//! - `CatalogError`: product catalog client errors
//! - `CheckoutError`: checkout pipeline errors (wraps the two above)
//! - `AppError`: HTTP layer errors (wraps checkout errors for responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{AddressField, ProductId};

/// Coarse classification shared by every checkout failure.
///
/// Everything except `Rejected` means the service could not reach a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request payload could not be built
    Encoding,
    /// Remote service unreachable or the connection broke
    Transport,
    /// Unexpected status code or undecodable response body
    Protocol,
    /// Field marked invalid or not enough stock
    Rejected,
}

/// Field validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to marshal payload: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("failed to validate {field}: {source}")]
    Transport {
        field: AddressField,
        #[source]
        source: reqwest::Error,
    },

    #[error("validation failed for {field}: status {status}")]
    Status { field: AddressField, status: u16 },

    #[error("failed to decode validation response for {field}: {message}")]
    Decode { field: AddressField, message: String },

    #[error("{field} is invalid")]
    InvalidField { field: AddressField },
}

impl ValidationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ValidationError::Encoding(_) => FailureKind::Encoding,
            ValidationError::Transport { .. } => FailureKind::Transport,
            ValidationError::Status { .. } | ValidationError::Decode { .. } => {
                FailureKind::Protocol
            }
            ValidationError::InvalidField { .. } => FailureKind::Rejected,
        }
    }

    /// The address field this error is about, if any
    #[cfg(test)]
    pub fn field(&self) -> Option<AddressField> {
        match self {
            ValidationError::Encoding(_) => None,
            ValidationError::Transport { field, .. }
            | ValidationError::Status { field, .. }
            | ValidationError::Decode { field, .. }
            | ValidationError::InvalidField { field } => Some(*field),
        }
    }
}

/// Product catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl CatalogError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::Request(_) => FailureKind::Transport,
            CatalogError::NotFound(_)
            | CatalogError::Api { .. }
            | CatalogError::Deserialization(_) => FailureKind::Protocol,
        }
    }
}

/// Checkout pipeline errors
///
/// Always carries exactly one cause: the first failure found.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Address(#[from] ValidationError),

    #[error("failed to get product {product_id}: {source}")]
    ProductLookup {
        product_id: ProductId,
        #[source]
        source: CatalogError,
    },

    #[error("insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        product: String,
        requested: u32,
        available: u32,
    },
}

impl CheckoutError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckoutError::Address(e) => e.kind(),
            CheckoutError::ProductLookup { source, .. } => source.kind(),
            CheckoutError::InsufficientStock { .. } => FailureKind::Rejected,
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.kind() == FailureKind::Rejected
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Checkout(e) => match e.kind() {
                FailureKind::Rejected => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string(), None),
                FailureKind::Encoding => {
                    tracing::error!(error = %e, "Checkout request encoding failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        None,
                    )
                }
                FailureKind::Transport | FailureKind::Protocol => (
                    StatusCode::BAD_GATEWAY,
                    "Bad gateway".to_string(),
                    Some(e.to_string()),
                ),
            },
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                Some(msg.clone()),
            ),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string(), None),
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_is_a_rejection() {
        let err = ValidationError::InvalidField {
            field: AddressField::City,
        };

        assert_eq!(err.kind(), FailureKind::Rejected);
        assert_eq!(err.field(), Some(AddressField::City));
        assert_eq!(err.to_string(), "city is invalid");
    }

    #[test]
    fn status_and_decode_are_protocol_faults() {
        let status = ValidationError::Status {
            field: AddressField::Zip,
            status: 503,
        };
        let decode = ValidationError::Decode {
            field: AddressField::Zip,
            message: "missing field `valid`".to_string(),
        };

        assert_eq!(status.kind(), FailureKind::Protocol);
        assert_eq!(decode.kind(), FailureKind::Protocol);
        assert!(status.to_string().contains("zip"));
    }

    #[test]
    fn insufficient_stock_message_names_product_and_counts() {
        let err = CheckoutError::InsufficientStock {
            product_id: ProductId(1),
            product: "Widget".to_string(),
            requested: 5,
            available: 3,
        };

        assert!(err.is_rejection());
        assert_eq!(
            err.to_string(),
            "insufficient stock for Widget: requested 5, available 3"
        );
    }

    #[test]
    fn product_lookup_keeps_catalog_kind() {
        let err = CheckoutError::ProductLookup {
            product_id: ProductId(9),
            source: CatalogError::NotFound(ProductId(9)),
        };

        assert_eq!(err.kind(), FailureKind::Protocol);
        assert!(!err.is_rejection());
        assert_eq!(
            err.to_string(),
            "failed to get product 9: product 9 not found"
        );
    }

    #[test]
    fn address_error_is_transparent() {
        let err: CheckoutError = ValidationError::InvalidField {
            field: AddressField::Street,
        }
        .into();

        assert_eq!(err.to_string(), "street is invalid");
    }

    #[test]
    fn rejection_maps_to_unprocessable_entity() {
        let err = AppError::from(CheckoutError::InsufficientStock {
            product_id: ProductId(1),
            product: "Widget".to_string(),
            requested: 2,
            available: 1,
        });

        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn collaborator_fault_maps_to_bad_gateway() {
        let err = AppError::from(CheckoutError::from(ValidationError::Status {
            field: AddressField::Country,
            status: 500,
        }));

        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
