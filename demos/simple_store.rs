//! Example: Immediate Command API
//!
//! Uses the execution controller directly, without the clocked pin
//! protocol, for hosts that only want the store semantics.
//!
//! Run with:
//! ```sh
//! cargo run --example simple_store
//! ```

use libcam8::{Command, ExecController, Status};

fn main() {
    let mut controller = ExecController::new();

    // Fill every slot
    for key in 0..8 {
        let response = controller.execute(Command::insert(key, 0xF - key));
        assert_eq!(response.status, Status::Ok);
    }
    println!("occupancy after fill: {}", controller.store().occupancy());

    // A ninth distinct key is rejected
    let response = controller.execute(Command::insert(0xA, 0x1));
    println!("insert(0xA) on full store -> {}", response.status);

    // An existing key upserts even when full
    let response = controller.execute(Command::insert(0x3, 0x0));
    println!("insert(0x3) upsert        -> {}", response.status);

    // Delete frees a slot and reports the deleted value
    let response = controller.execute(Command::delete(0x5));
    println!(
        "delete(0x5)               -> {} value=0x{:X}",
        response.status, response.value
    );

    // Now the rejected key fits
    let response = controller.execute(Command::insert(0xA, 0x1));
    println!("insert(0xA) after delete  -> {}", response.status);

    for key in 0..16 {
        if let Some(value) = controller.store().get(key) {
            println!("  key 0x{:X} -> 0x{:X}", key, value);
        }
    }
}
