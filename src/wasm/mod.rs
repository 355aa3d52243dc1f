//! WebAssembly bindings for the CAM peripheral emulator.
//!
//! This module provides a JavaScript-callable wrapper around [`crate::Cam8`],
//! enabling browser-hosted driving of the clocked pin interface.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::CamEmulator;
