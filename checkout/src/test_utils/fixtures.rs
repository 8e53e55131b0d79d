//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;

use crate::config::Config;
use crate::domain::entities::{Address, CartItem};

pub const TEST_SECRET: &str = "test-secret-key";

/// A well-formed US address
pub fn test_address() -> Address {
    Address {
        address_line1: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
        country: "US".to_string(),
    }
}

/// Three line items for products 1, 2 and 3
pub fn test_cart() -> Vec<CartItem> {
    vec![
        CartItem::new(1, 2),
        CartItem::new(2, 1),
        CartItem::new(3, 1),
    ]
}

pub fn test_config() -> Config {
    Config {
        secret_key: TEST_SECRET.to_string(),
        catalog_url: "http://localhost:5001".to_string(),
        validator_url: "http://localhost:5003".to_string(),
        port: 5002,
        http_timeout: None,
    }
}

/// Sign arbitrary claims as an HS256 token
pub fn sign_token(claims: &Value, secret: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(json!({ "alg": "HS256", "typ": "JWT" }).to_string());
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    let signing_input = format!("{}.{}", header, payload);

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    format!("{}.{}", signing_input, signature)
}

/// Access token for `customer@example.com`, valid for an hour
pub fn test_token() -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    sign_token(
        &json!({ "sub": "customer@example.com", "type": "access", "exp": exp }),
        TEST_SECRET,
    )
}
