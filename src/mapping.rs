use crate::domain::customer::{Customer, CustomerError};

// ============================================================================
// JSON Mapping
// ============================================================================
//
// Wire form of a customer record. Keys are camelCase; the display name is
// derived and never stored.
//
// ============================================================================

pub fn to_json(customer: &Customer) -> Result<String, CustomerError> {
    let json = serde_json::to_string(customer)?;
    tracing::debug!(customer_id = %customer.customer_id, bytes = json.len(), "Encoded customer");
    Ok(json)
}

pub fn to_json_value(customer: &Customer) -> Result<serde_json::Value, CustomerError> {
    Ok(serde_json::to_value(customer)?)
}

pub fn from_json(json: &str) -> Result<Customer, CustomerError> {
    let customer: Customer = serde_json::from_str(json).map_err(|e| {
        tracing::debug!(error = %e, "Failed to decode customer");
        CustomerError::from(e)
    })?;
    tracing::debug!(customer_id = %customer.customer_id, version = customer.version, "Decoded customer");
    Ok(customer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Address, CustomerType};

    fn create_test_customer() -> Customer {
        let mut customer = Customer::new("cust-1", "org-1")
            .with_customer_type(CustomerType::Individual)
            .with_name("Jane", "Doe")
            .with_email("jane@example.com")
            .with_version(3);
        customer.add_address(Address {
            street: "123 Main St".to_string(),
            city: "Anytown".to_string(),
            state: "CA".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
        });
        customer.add_phone_number("555-1234");
        customer
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let value = to_json_value(&create_test_customer()).unwrap();

        assert_eq!(value["customerId"], "cust-1");
        assert_eq!(value["organizationId"], "org-1");
        assert_eq!(value["customerType"], "INDIVIDUAL");
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["requiresValidation"], false);
        assert_eq!(value["phoneNumbers"][0], "555-1234");
        assert_eq!(value["addresses"][0]["postalCode"], "12345");
        assert!(value.get("displayName").is_none());
    }

    #[test]
    fn test_absent_fields_encode_as_null() {
        let value = to_json_value(&Customer::new("cust-1", "org-1")).unwrap();

        assert!(value["firstName"].is_null());
        assert!(value["customerType"].is_null());
        assert_eq!(value["addresses"], serde_json::json!([]));
    }

    #[test]
    fn test_json_round_trip_preserves_record() {
        let customer = create_test_customer();
        let decoded = from_json(&to_json(&customer).unwrap()).unwrap();

        assert_eq!(decoded, customer);
        assert_eq!(decoded.display_name(), "Jane Doe");
    }

    #[test]
    fn test_missing_collections_decode_empty() {
        let customer = from_json(r#"{"customerId":"c","organizationId":"o"}"#).unwrap();

        assert!(customer.addresses.is_empty());
        assert!(customer.phone_numbers.is_empty());
        assert!(!customer.requires_validation);
        assert_eq!(customer.version, 0);
        assert_eq!(customer.display_name(), " ");
    }

    #[test]
    fn test_missing_identity_fails() {
        let result = from_json(r#"{"organizationId":"o"}"#);
        assert!(matches!(result, Err(CustomerError::Serialization(_))));
    }

    #[test]
    fn test_malformed_json_fails() {
        let result = from_json("{not json");
        assert!(matches!(result, Err(CustomerError::Serialization(_))));
    }

    #[test]
    fn test_unknown_customer_type_fails_to_decode() {
        let result = from_json(r#"{"customerId":"c","organizationId":"o","customerType":"RESELLER"}"#);
        assert!(matches!(result, Err(CustomerError::Serialization(_))));
    }
}
