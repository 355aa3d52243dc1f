//! WASM API for the CAM peripheral emulator.
//!
//! Provides a JavaScript-callable interface for ticking the device at the
//! pin level and inspecting its outputs.

use crate::command::BusInputs;
use crate::device::Cam8;
use wasm_bindgen::prelude::*;

/// JavaScript-facing wrapper around the clocked CAM peripheral.
///
/// Inputs and outputs use the packed pin encoding: `data` carries the key
/// in bits 7:4 and the value in bits 3:0; `ctrl` carries the strobe in
/// bit 2 and the opcode in bits 1:0; the status comes back in bits 7:6 of
/// `ctrl_out`.
#[wasm_bindgen]
pub struct CamEmulator {
    cam: Cam8,
}

#[wasm_bindgen]
impl CamEmulator {
    /// Creates a device in its power-on reset state.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CamEmulator {
        CamEmulator { cam: Cam8::new() }
    }

    /// Advances the device one clock cycle with the given pin levels.
    ///
    /// Returns `false` if the cycle strobed the reserved opcode (the edge
    /// is discarded and the device is untouched), `true` otherwise.
    pub fn tick(&mut self, data: u8, ctrl: u8, reset: bool) -> bool {
        self.cam
            .tick(BusInputs::from_pins(data, ctrl, reset))
            .is_ok()
    }

    /// Packed data output pins: the result value in bits 3:0.
    pub fn data_out(&self) -> u8 {
        self.cam.data_out()
    }

    /// Packed control output pins: the result status in bits 7:6.
    pub fn ctrl_out(&self) -> u8 {
        self.cam.ctrl_out()
    }

    /// Status field of the latched response (0=OK, 1=FULL, 2=NOTFOUND,
    /// 3=BUSY).
    pub fn status(&self) -> u8 {
        self.cam.status().bits()
    }

    /// Value field of the latched response.
    pub fn value(&self) -> u8 {
        self.cam.value()
    }

    /// True while a command is executing.
    pub fn busy(&self) -> bool {
        self.cam.busy()
    }

    /// Number of valid entries currently in the store.
    pub fn occupancy(&self) -> u32 {
        self.cam.store().occupancy() as u32
    }

    /// Total clock cycles since power-on.
    pub fn cycles(&self) -> u64 {
        self.cam.cycles()
    }

    /// Returns the device to its power-on state.
    pub fn reset(&mut self) {
        self.cam.reset();
    }
}

impl Default for CamEmulator {
    fn default() -> Self {
        Self::new()
    }
}
