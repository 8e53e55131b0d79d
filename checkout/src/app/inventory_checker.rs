//! Inventory checker
//!
//! Confirms every cart line can be fulfilled from current catalog stock.

use std::sync::Arc;

use crate::domain::entities::CartItem;
use crate::domain::ports::ProductCatalog;
use crate::error::CheckoutError;

pub struct InventoryChecker<PC>
where
    PC: ProductCatalog,
{
    catalog: Arc<PC>,
}

impl<PC> InventoryChecker<PC>
where
    PC: ProductCatalog,
{
    pub fn new(catalog: Arc<PC>) -> Self {
        Self { catalog }
    }

    /// Check items in cart order; the first lookup failure or shortfall
    /// ends the scan.
    pub async fn validate_stock(&self, items: &[CartItem]) -> Result<(), CheckoutError> {
        for item in items {
            let product = self
                .catalog
                .get_product(item.product_id)
                .await
                .map_err(|source| CheckoutError::ProductLookup {
                    product_id: item.product_id,
                    source,
                })?;

            if !product.can_fulfill(item.quantity) {
                tracing::debug!(
                    product_id = item.product_id.0,
                    requested = item.quantity,
                    available = product.stock,
                    "Insufficient stock"
                );
                return Err(CheckoutError::InsufficientStock {
                    product_id: item.product_id,
                    product: product.name,
                    requested: item.quantity,
                    available: product.stock,
                });
            }
        }

        Ok(())
    }
}
