//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{AddressField, Product, ProductId};
use crate::domain::ports::{FieldValidator, ProductCatalog};
use crate::error::{CatalogError, ValidationError};

// ============================================================================
// Mock Field Validator
// ============================================================================

/// Accepts every field unless told otherwise
#[derive(Default)]
pub struct MockFieldValidator {
    rejected: HashSet<AddressField>,
    fail_status: Option<u16>,
    calls: Arc<RwLock<Vec<(AddressField, String)>>>,
}

impl MockFieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call answers with a non-success status
    pub fn failing_with_status(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    /// Mark a field as invalid
    pub fn rejecting(mut self, field: AddressField) -> Self {
        self.rejected.insert(field);
        self
    }

    pub fn calls(&self) -> Vec<(AddressField, String)> {
        self.calls.read().unwrap().clone()
    }

    pub fn checked_fields(&self) -> Vec<AddressField> {
        self.calls().into_iter().map(|(field, _)| field).collect()
    }
}

#[async_trait]
impl FieldValidator for MockFieldValidator {
    async fn validate_field(
        &self,
        field: AddressField,
        value: &str,
    ) -> Result<(), ValidationError> {
        self.calls
            .write()
            .unwrap()
            .push((field, value.to_string()));

        if let Some(status) = self.fail_status {
            return Err(ValidationError::Status { field, status });
        }

        if self.rejected.contains(&field) {
            return Err(ValidationError::InvalidField { field });
        }

        Ok(())
    }
}

// ============================================================================
// Mock Product Catalog
// ============================================================================

/// Products not registered with `with_product` are reported as not found
#[derive(Default)]
pub struct MockProductCatalog {
    products: HashMap<ProductId, Product>,
    should_fail: bool,
    queried: Arc<RwLock<Vec<ProductId>>>,
}

impl MockProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_product(mut self, id: i64, name: &str, stock: u32) -> Self {
        self.products.insert(
            ProductId(id),
            Product {
                name: name.to_string(),
                stock,
            },
        );
        self
    }

    pub fn queried(&self) -> Vec<ProductId> {
        self.queried.read().unwrap().clone()
    }
}

#[async_trait]
impl ProductCatalog for MockProductCatalog {
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.queried.write().unwrap().push(id);

        if self.should_fail {
            return Err(CatalogError::Api {
                status: 503,
                message: "Mock failure".to_string(),
            });
        }

        self.products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}
