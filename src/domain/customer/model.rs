use serde::{Deserialize, Serialize};

use super::value_objects::{Address, CustomerType};

// ============================================================================
// Customer Record
// ============================================================================

/// A customer's identity and contact profile, scoped to one organization.
///
/// `version` is owned by whatever persists the record; nothing here bumps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub organization_id: String,
    pub customer_type: Option<CustomerType>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub requires_validation: bool,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            organization_id: organization_id.into(),
            customer_type: None,
            first_name: None,
            last_name: None,
            email: None,
            version: 0,
            requires_validation: false,
            addresses: Vec::new(),
            phone_numbers: Vec::new(),
        }
    }

    pub fn with_customer_type(mut self, customer_type: CustomerType) -> Self {
        self.customer_type = Some(customer_type);
        self
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    pub fn with_requires_validation(mut self, requires_validation: bool) -> Self {
        self.requires_validation = requires_validation;
        self
    }

    pub fn add_address(&mut self, address: Address) {
        self.addresses.push(address);
    }

    pub fn add_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_numbers.push(phone_number.into());
    }

    /// First and last name joined by a single space.
    ///
    /// An absent name reads as the empty string, so an unnamed customer
    /// yields `" "`.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
