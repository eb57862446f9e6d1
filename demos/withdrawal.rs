//! Withdrawal Session
//!
//! This demo drives one terminal through a few customer sessions with
//! logging enabled.
//!
//! Key concepts:
//! - Business outcomes (wrong PIN, insufficient funds) are `Ok` values
//! - Out-of-sequence operations fail with `IllegalOperation`
//! - An emptied terminal stays out of service
//!
//! Run with: RUST_LOG=debug cargo run --example withdrawal

use cashpoint::{MachineBuilder, MachineError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Withdrawal Session Demo ===\n");

    let mut atm = MachineBuilder::new().initial_cash(1000).build()?;

    println!("Customer 1: wrong PIN, then a small withdrawal");
    atm.insert_card()?;
    println!("  {}", atm.enter_pin(1111)?);
    println!("  {}", atm.enter_pin(1234)?);
    println!("  {}", atm.request_cash(100)?);
    println!("  Cash left: {}", atm.cash_available());

    println!("\nCustomer 2: asks for more than the terminal holds");
    atm.insert_card()?;
    atm.enter_pin(1234)?;
    println!("  {}", atm.request_cash(5000)?);

    println!("\nCustomer 3: empties the terminal");
    atm.insert_card()?;
    atm.enter_pin(1234)?;
    println!("  {}", atm.request_cash(900)?);
    println!("  State: {}", atm.state());

    println!("\nCustomer 4: arrives too late");
    match atm.insert_card() {
        Err(err @ MachineError::IllegalOperation { .. }) => {
            println!("  Rejected [{}]: {}", err.error_code(), err)
        }
        Ok(outcome) => println!("  Unexpected: {outcome}"),
    }

    println!("\nPath: {:?}", atm.history().get_path());
    println!("\n=== Demo Complete ===");
    Ok(())
}
