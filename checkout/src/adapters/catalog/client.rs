//! Product catalog client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductCatalog;
use crate::error::CatalogError;

/// Reads products from `GET {base_url}/api/products/{id}`
pub struct HttpProductCatalog {
    http: Client,
    base_url: String,
}

impl HttpProductCatalog {
    #[cfg(test)]
    pub fn new(base_url: String) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }
}

#[async_trait]
impl ProductCatalog for HttpProductCatalog {
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let response = self.http.get(self.product_url(id)).send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CatalogError::Deserialization(e.to_string()))
        } else if status == StatusCode::NOT_FOUND {
            Err(CatalogError::NotFound(id))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
