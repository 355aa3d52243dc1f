//! # 8-Slot CAM Peripheral Emulator Core
//!
//! A cycle-accurate emulator for a small content-addressable key-value
//! peripheral: a fixed table of eight 4-bit key/value slots reachable only
//! through a synchronous, strobe-triggered command interface.
//!
//! This crate models the device's observable contract (the store semantics
//! and the command protocol's state machine) one clock cycle at a time,
//! with a direct-call API for hosts that do not need emulated latency.
//!
//! ## Quick Start
//!
//! ```rust
//! use libcam8::{Cam8, Command, Status};
//!
//! let mut cam = Cam8::new();
//!
//! // Insert, look up, delete via the host-side handshake helper
//! assert_eq!(cam.issue(Command::insert(0x4, 0x2)).unwrap().status, Status::Ok);
//!
//! let response = cam.issue(Command::lookup(0x4)).unwrap();
//! assert_eq!((response.status, response.value), (Status::Ok, 0x2));
//!
//! let response = cam.issue(Command::delete(0x4)).unwrap();
//! assert_eq!((response.status, response.value), (Status::Ok, 0x2));
//! ```
//!
//! ## Architecture
//!
//! Control flow follows the hardware: command decoder -> execution
//! controller -> associative store -> result latch. The controller is the
//! sole mutator of the store; the latch is the sole path by which a host
//! observes an outcome.
//!
//! - **Modularity**: each hardware component is its own module with a
//!   narrow seam
//! - **Determinism**: the slot scan has bounded, outcome-independent
//!   latency; no timing side channel leaks occupancy
//! - **WebAssembly Portability**: no OS dependencies, no clocks beyond the
//!   host-driven tick
//! - **Hardware Fidelity**: 4-bit fields are masked, never rejected;
//!   anomalies are reported through the status field, not errors
//!
//! ## Modules
//!
//! - `store` - the eight-slot associative table
//! - `command` - opcodes, sampled bus inputs, strobe-edge decoding
//! - `controller` - the IDLE/RUNNING/PUBLISH state machine and per-opcode
//!   policy
//! - `latch` - status/response types and the result latch
//! - `device` - the composed peripheral with the clocked pin interface

pub mod command;
pub mod controller;
pub mod device;
pub mod latch;
pub mod store;

// WASM bindings (feature-gated)
pub mod wasm;

// Re-export public API
pub use command::{BusInputs, Command, CommandDecoder, Opcode};
pub use controller::{ExecController, ExecState, SCAN_CYCLES};
pub use device::{Cam8, RESPONSE_LATENCY};
pub use latch::{Response, ResultLatch, Status};
pub use store::{CamStore, Slot, KEY_MASK, SLOT_COUNT, VALUE_MASK};

/// Errors that can occur while decoding a command.
///
/// The device protocol has no fatal conditions: all normal anomalies (FULL,
/// NOTFOUND, BUSY) are reported through the status field. The only error is
/// a strobe carrying the reserved opcode encoding, whose behavior the
/// contract leaves unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The 2-bit opcode field held the reserved encoding.
    ///
    /// Contains the raw opcode bits for diagnostics.
    ReservedOpcode(u8),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CommandError::ReservedOpcode(bits) => {
                write!(f, "Opcode encoding 0b{:02b} is reserved", bits)
            }
        }
    }
}

impl std::error::Error for CommandError {}
