//! Field validation service client

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use urlencoding::encode;

use crate::domain::entities::{AddressField, ValidationVerdict};
use crate::domain::ports::FieldValidator;
use crate::error::ValidationError;

/// Calls `POST {base_url}/validate/{field}` once per field
pub struct HttpFieldValidator {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ValidateRequest<'a> {
    value: &'a str,
}

impl HttpFieldValidator {
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

    fn validate_url(&self, field: AddressField) -> String {
        format!("{}/validate/{}", self.base_url, encode(field.as_str()))
    }
}

#[async_trait]
impl FieldValidator for HttpFieldValidator {
    async fn validate_field(
        &self,
        field: AddressField,
        value: &str,
    ) -> Result<(), ValidationError> {
        let body =
            serde_json::to_vec(&ValidateRequest { value }).map_err(ValidationError::Encoding)?;

        let response = self
            .http
            .post(self.validate_url(field))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| ValidationError::Transport { field, source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                field = %field,
                status = status.as_u16(),
                "Validator returned error status"
            );
            return Err(ValidationError::Status {
                field,
                status: status.as_u16(),
            });
        }

        let verdict: ValidationVerdict = response.json().await.map_err(|e| ValidationError::Decode {
            field,
            message: e.to_string(),
        })?;

        if !verdict.valid {
            return Err(ValidationError::InvalidField { field });
        }

        Ok(())
    }
}
