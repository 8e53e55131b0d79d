//! Checkout handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use crate::auth::Customer;
use crate::domain::entities::{Address, CartItem};
use crate::domain::ports::{FieldValidator, ProductCatalog};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(alias = "shippingAddress")]
    pub shipping_address: Address,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: String,
    pub checkout_id: Uuid,
}

impl CheckoutRequest {
    fn check(&self) -> Result<(), AppError> {
        if self.items.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }

        if let Some(item) = self.items.iter().find(|i| i.quantity == 0) {
            return Err(AppError::BadRequest(format!(
                "Quantity for product {} must be positive",
                item.product_id
            )));
        }

        Ok(())
    }
}

/// POST /api/checkout/process
///
/// Validate the shipping address and cart stock for the authenticated
/// customer. Responds 200 when the order may proceed.
pub async fn process_checkout<FV, PC>(
    State(state): State<AppState<FV, PC>>,
    Extension(customer): Extension<Customer>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, AppError>
where
    FV: FieldValidator + 'static,
    PC: ProductCatalog + 'static,
{
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    request.check()?;

    let checkout_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "checkout",
        %checkout_id,
        customer = %customer.subject,
        items = request.items.len()
    );

    state
        .checkout_service
        .checkout(&request.shipping_address, &request.items)
        .instrument(span)
        .await?;

    Ok(Json(CheckoutResponse {
        success: true,
        message: "Checkout validated".to_string(),
        checkout_id,
    }))
}
