//! Shipping address entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address fields in the order they are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressField {
    Street,
    City,
    State,
    Zip,
    Country,
}

impl AddressField {
    /// Every field, in validation order
    pub const ALL: [AddressField; 5] = [
        AddressField::Street,
        AddressField::City,
        AddressField::State,
        AddressField::Zip,
        AddressField::Country,
    ];

    /// Name used in the validator endpoint path and in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::Street => "street",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Zip => "zip",
            AddressField::Country => "country",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shipping address submitted with a checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(alias = "addressLine1")]
    pub address_line1: String,
    pub city: String,
    pub state: String,
    #[serde(alias = "zipCode")]
    pub zip_code: String,
    pub country: String,
}

impl Address {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.address_line1,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Zip => &self.zip_code,
            AddressField::Country => &self.country,
        }
    }

    /// `(field, value)` pairs in validation order
    pub fn fields(&self) -> impl Iterator<Item = (AddressField, &str)> + '_ {
        AddressField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

/// Verdict returned by the field validation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    #[serde(default)]
    pub field: String,
    pub valid: bool,
}
