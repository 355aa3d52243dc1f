//! Fuzz target for the immediate command API.
//!
//! Runs arbitrary command sequences against the controller and checks
//! every response against a reference map with capacity-8 semantics.

#![no_main]

use arbitrary::Arbitrary;
use libcam8::{Command, ExecController, Status, KEY_MASK, SLOT_COUNT};
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Lookup { key: u8 },
    Insert { key: u8, value: u8 },
    Delete { key: u8 },
}

fuzz_target!(|ops: Vec<FuzzOp>| {
    let mut controller = ExecController::new();
    let mut model: HashMap<u8, u8> = HashMap::new();

    for op in ops {
        match op {
            FuzzOp::Lookup { key } => {
                let response = controller.execute(Command::lookup(key));
                match model.get(&(key & KEY_MASK)) {
                    Some(&value) => {
                        assert_eq!(response.status, Status::Ok);
                        assert_eq!(response.value, value);
                    }
                    None => assert_eq!(response.status, Status::NotFound),
                }
            }
            FuzzOp::Insert { key, value } => {
                let response = controller.execute(Command::insert(key, value));
                let key = key & KEY_MASK;
                let value = value & 0x0F;
                if model.contains_key(&key) || model.len() < SLOT_COUNT {
                    model.insert(key, value);
                    assert_eq!(response.status, Status::Ok);
                } else {
                    assert_eq!(response.status, Status::Full);
                }
            }
            FuzzOp::Delete { key } => {
                let response = controller.execute(Command::delete(key));
                match model.remove(&(key & KEY_MASK)) {
                    Some(value) => {
                        assert_eq!(response.status, Status::Ok);
                        assert_eq!(response.value, value);
                    }
                    None => assert_eq!(response.status, Status::NotFound),
                }
            }
        }

        assert_eq!(controller.store().occupancy(), model.len());
    }
});
