//! Address validator
//!
//! Runs every address field through the field validation service, in a
//! fixed order, stopping at the first field that fails.

use std::sync::Arc;

use crate::domain::entities::Address;
use crate::domain::ports::FieldValidator;
use crate::error::ValidationError;

pub struct AddressValidator<FV>
where
    FV: FieldValidator,
{
    validator: Arc<FV>,
}

impl<FV> AddressValidator<FV>
where
    FV: FieldValidator,
{
    pub fn new(validator: Arc<FV>) -> Self {
        Self { validator }
    }

    /// Validate street, city, state, zip and country, in that order.
    ///
    /// The first error is returned as-is; later fields are not sent.
    pub async fn validate(&self, address: &Address) -> Result<(), ValidationError> {
        for (field, value) in address.fields() {
            if let Err(e) = self.validator.validate_field(field, value).await {
                tracing::debug!(field = %field, error = %e, "Address field failed validation");
                return Err(e);
            }
        }

        Ok(())
    }
}
