//! Checkout service
//!
//! Composes the address validator and the inventory checker. Address
//! validation always runs first; stock is only checked for an address that
//! passed.

use std::sync::Arc;

use crate::app::{AddressValidator, InventoryChecker};
use crate::domain::entities::{Address, CartItem};
use crate::domain::ports::{FieldValidator, ProductCatalog};
use crate::error::CheckoutError;

pub struct CheckoutService<FV, PC>
where
    FV: FieldValidator,
    PC: ProductCatalog,
{
    address_validator: AddressValidator<FV>,
    inventory_checker: InventoryChecker<PC>,
}

impl<FV, PC> CheckoutService<FV, PC>
where
    FV: FieldValidator,
    PC: ProductCatalog,
{
    pub fn new(validator: Arc<FV>, catalog: Arc<PC>) -> Self {
        Self {
            address_validator: AddressValidator::new(validator),
            inventory_checker: InventoryChecker::new(catalog),
        }
    }

    /// Accept or reject a proposed order.
    ///
    /// `Ok(())` means every address field was confirmed valid and every item
    /// is in stock. Otherwise the error is the first failure found.
    pub async fn checkout(
        &self,
        address: &Address,
        items: &[CartItem],
    ) -> Result<(), CheckoutError> {
        let result = match self.address_validator.validate(address).await {
            Ok(()) => self.inventory_checker.validate_stock(items).await,
            Err(e) => Err(e.into()),
        };

        if let Err(e) = &result {
            if e.is_rejection() {
                tracing::info!(reason = %e, "Checkout rejected");
            } else {
                tracing::warn!(error = %e, kind = ?e.kind(), "Checkout could not be decided");
            }
            return result;
        }

        tracing::info!(items = items.len(), "Checkout accepted");
        Ok(())
    }
}
