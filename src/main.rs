use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use customer_model::domain::customer::typescript;
use customer_model::{mapping, Address, Customer, CustomerType};

fn main() -> anyhow::Result<()> {
    // Default to INFO, overridable with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_model=debug"))
        )
        .init();

    let organization_id = Uuid::new_v4().to_string();
    let mut customer = Customer::new(Uuid::new_v4().to_string(), organization_id)
        .with_customer_type(CustomerType::Individual)
        .with_name("Jane", "Doe")
        .with_email("jane.doe@example.com");

    customer.add_address(Address {
        street: "123 Main St".to_string(),
        city: "Anytown".to_string(),
        state: "CA".to_string(),
        postal_code: "12345".to_string(),
        country: "USA".to_string(),
    });
    customer.add_phone_number("555-1234");

    tracing::info!(customer_id = %customer.customer_id, "Customer: {}", customer.display_name());

    let json = mapping::to_json(&customer)?;
    let decoded = mapping::from_json(&json)?;
    tracing::info!("JSON: {}", json);
    tracing::info!(
        addresses = decoded.addresses.len(),
        phone_numbers = decoded.phone_numbers.len(),
        "Decoded customer matches: {}",
        decoded == customer
    );

    println!("{}", typescript::render_declarations());

    Ok(())
}
