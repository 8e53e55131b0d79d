//! Field validation service port

use async_trait::async_trait;

use crate::domain::entities::AddressField;
use crate::error::ValidationError;

/// Judges one address field at a time
#[async_trait]
pub trait FieldValidator: Send + Sync {
    /// Validate a single field value.
    ///
    /// Returns `Ok(())` only when the service answered and marked the value
    /// valid; `ValidationError::InvalidField` when it answered "invalid".
    async fn validate_field(&self, field: AddressField, value: &str)
        -> Result<(), ValidationError>;
}
