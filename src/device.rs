//! Top-level CAM peripheral: decoder, controller, and latch behind a
//! clocked pin interface.
//!
//! `Cam8` models the device one clock cycle at a time. Each call to
//! [`tick`](Cam8::tick) samples the input lines, advances the state machine,
//! and updates the output lines. Control flow inside a cycle matches the
//! hardware: decoder -> execution controller -> associative store -> result
//! latch.
//!
//! ## Handshake
//!
//! 1. Drive the command fields and raise `go`. The command is accepted on
//!    the rising edge only; a held-high strobe never retriggers.
//! 2. Wait at least [`RESPONSE_LATENCY`] cycles.
//! 3. Read `status`/`value`. The response stays stable until the next
//!    accepted command completes.
//! 4. Deassert `go` before issuing again.
//!
//! A strobe that arrives while a command is still executing is answered
//! with BUSY that same cycle and is not queued; the in-flight command still
//! completes on schedule.
//!
//! ## Output Pin Map
//!
//! | Field          | Bits | Description           |
//! |----------------|------|-----------------------|
//! | data_out       | 3:0  | result value          |
//! | ctrl_out       | 7:6  | result status         |
//!
//! # Example
//!
//! ```
//! use libcam8::{BusInputs, Cam8, Command, Status, RESPONSE_LATENCY};
//!
//! let mut cam = Cam8::new();
//!
//! // Pin-level handshake: strobe an INSERT, wait out the scan
//! cam.tick(BusInputs::strobe(&Command::insert(0x4, 0x2))).unwrap();
//! for _ in 1..RESPONSE_LATENCY {
//!     cam.tick(BusInputs::default()).unwrap();
//! }
//! assert_eq!(cam.status(), Status::Ok);
//!
//! // Or let the host convenience drive the handshake
//! let response = cam.issue(Command::lookup(0x4)).unwrap();
//! assert_eq!((response.status, response.value), (Status::Ok, 0x2));
//! ```

use crate::command::{BusInputs, Command, CommandDecoder};
use crate::controller::{ExecController, ExecState, SCAN_CYCLES};
use crate::latch::{Response, ResultLatch, Status};
use crate::store::CamStore;
use crate::CommandError;

/// Cycles from the triggering edge until the response is valid and stable:
/// one accept cycle, the eight-comparison scan, one publish cycle.
///
/// This is the guaranteed lower bound; hosts must wait at least this many
/// cycles after a strobe before reading the response.
pub const RESPONSE_LATENCY: u64 = SCAN_CYCLES as u64 + 2;

/// The 8-slot CAM peripheral.
///
/// Owns the command decoder, execution controller (and through it the
/// store), and result latch, plus a monotonically increasing cycle counter.
pub struct Cam8 {
    decoder: CommandDecoder,
    controller: ExecController,
    latch: ResultLatch,
    cycles: u64,
}

impl Cam8 {
    /// Creates a device in its power-on reset state: store empty,
    /// controller idle, outputs `(OK, 0)`.
    pub fn new() -> Self {
        Self {
            decoder: CommandDecoder::new(),
            controller: ExecController::new(),
            latch: ResultLatch::new(),
            cycles: 0,
        }
    }

    /// Advances the device by one clock cycle.
    ///
    /// When `inputs.reset` is asserted the store, state machine, and latch
    /// clear unconditionally, overriding any in-flight command. The strobe
    /// level is still tracked during reset so that releasing reset with
    /// `go` held high does not manufacture an edge.
    ///
    /// A rising strobe edge is accepted when the controller is idle;
    /// otherwise the latch answers `(BUSY, 0)` that cycle and the edge is
    /// discarded. If the rejection lands on the in-flight command's publish
    /// cycle, BUSY wins: the retrying caller must not mistake the older
    /// command's result for its own.
    ///
    /// # Errors
    ///
    /// A rising edge carrying the reserved opcode returns
    /// [`CommandError::ReservedOpcode`]. The edge is consumed, no command
    /// starts, nothing is published, and the store is never touched; any
    /// in-flight command still advances normally. The device contract
    /// leaves reserved-opcode behavior unspecified beyond store integrity,
    /// so this concrete choice is an implementation detail, not a
    /// guarantee.
    pub fn tick(&mut self, inputs: BusInputs) -> Result<(), CommandError> {
        self.cycles += 1;

        if inputs.reset {
            self.controller.reset();
            self.latch.reset();
            self.decoder.sync(inputs.go);
            return Ok(());
        }

        let decoded = self.decoder.sample(&inputs);

        if let Ok(Some(cmd)) = decoded {
            if self.controller.is_idle() {
                // Accept cycle; the scan starts on the next tick
                self.controller.accept(cmd);
                return Ok(());
            }
        }

        // The state machine advances every non-reset cycle, so a rejected
        // or malformed strobe never stretches an in-flight command's window
        if let Some(response) = self.controller.step() {
            self.latch.publish(response);
        }

        match decoded {
            Ok(Some(_)) => {
                // Rejected edge: BUSY is published after any same-cycle
                // completion, so the retrying caller sees its rejection
                self.latch.publish(Response::busy());
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Drives a complete handshake: waits for the device to go idle,
    /// strobes `cmd`, runs the scan to completion, and returns the
    /// published response.
    ///
    /// The equivalent of a polling host; latency is paid in emulated
    /// cycles, observable through [`cycles`](Cam8::cycles).
    ///
    /// # Errors
    ///
    /// Never fails for commands built through [`Command`]; the error type
    /// is shared with the pin-level [`tick`](Cam8::tick) path.
    ///
    /// # Examples
    ///
    /// ```
    /// use libcam8::{Cam8, Command, Status};
    ///
    /// let mut cam = Cam8::new();
    /// cam.issue(Command::insert(0x6, 0x9)).unwrap();
    ///
    /// let response = cam.issue(Command::delete(0x6)).unwrap();
    /// assert_eq!((response.status, response.value), (Status::Ok, 0x9));
    /// ```
    pub fn issue(&mut self, cmd: Command) -> Result<Response, CommandError> {
        let idle = BusInputs::default();

        // Deassert the strobe and drain any command already in flight
        self.tick(idle)?;
        while self.busy() {
            self.tick(idle)?;
        }

        self.tick(BusInputs::strobe(&cmd))?;
        while self.busy() {
            self.tick(idle)?;
        }

        Ok(self.response())
    }

    /// Holds the reset line asserted for `cycles` clock cycles.
    ///
    /// Hardware reset sequences hold the line for several cycles before
    /// release; a single cycle is sufficient for this model.
    pub fn reset_for(&mut self, cycles: u64) {
        let reset = BusInputs {
            reset: true,
            ..BusInputs::default()
        };
        for _ in 0..cycles {
            // The reset path of tick cannot report an error
            let _ = self.tick(reset);
        }
    }

    /// Immediately returns the device to its power-on state without
    /// consuming a clock cycle.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.latch.reset();
        self.decoder.sync(false);
    }

    // ========== Output Observers ==========

    /// The latched response. Readable at any time; stale data from a prior
    /// command remains visible while a command is running.
    pub fn response(&self) -> Response {
        self.latch.response()
    }

    /// Status field of the latched response.
    pub fn status(&self) -> Status {
        self.latch.response().status
    }

    /// Value field of the latched response (4-bit).
    pub fn value(&self) -> u8 {
        self.latch.response().value
    }

    /// Returns true while a command is executing. A strobe in this window
    /// is answered with BUSY.
    pub fn busy(&self) -> bool {
        !self.controller.is_idle()
    }

    /// Current state of the execution controller.
    pub fn state(&self) -> ExecState {
        self.controller.state()
    }

    /// Read-only view of the associative store.
    pub fn store(&self) -> &CamStore {
        self.controller.store()
    }

    /// Total clock cycles since power-on.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Packed data output pins: the result value in bits 3:0.
    pub fn data_out(&self) -> u8 {
        self.latch.response().value
    }

    /// Packed control output pins: the result status in bits 7:6.
    pub fn ctrl_out(&self) -> u8 {
        self.latch.response().status.bits() << 6
    }
}

impl Default for Cam8 {
    fn default() -> Self {
        Self::new()
    }
}
