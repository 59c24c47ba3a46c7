//! Feature Toggle
//!
//! This example demonstrates a two-state machine that is saved and restored.
//!
//! Key concepts:
//! - Declaring a machine with the `fsm!` macro
//! - Observing transitions through a callback
//! - Rejected transitions leave the cursor untouched
//! - JSON round-trip of the whole machine
//!
//! Run with: cargo run --example toggle

use named_fsm::core::Fsm;
use named_fsm::fsm;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Feature Toggle ===\n");

    let mut toggle = fsm! {
        name: "Feature Toggle",
        transitions: [
            DISABLED => ENABLED : ENABLE,
            ENABLED => DISABLED : DISABLE,
        ],
        initial: DISABLED,
    }?;

    println!("{}", toggle.get_trans());
    println!("Initial state: {}\n", toggle.get_state());

    let notify = |prev: &str, new: &str, action: &str| {
        println!("  {action}: {prev} -> {new}");
    };

    toggle.exec_with("ENABLE", "ENABLED", notify)?;
    if let Err(err) = toggle.exec_with("ENABLE", "ENABLED", notify) {
        println!("  rejected: {err}");
    }

    let json = toggle.to_json_pretty()?;
    println!("\nSaved:\n{json}\n");

    let mut restored = Fsm::from_json(&json)?;
    restored.exec_with("DISABLE", "DISABLED", notify)?;
    println!("\nRestored machine is now {}", restored.get_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
