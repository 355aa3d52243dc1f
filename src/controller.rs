//! Execution controller: the state machine that runs commands against the
//! associative store.
//!
//! ## Execution Model
//!
//! The controller is strictly sequential; exactly one command is in flight
//! at a time and there is no queueing. A latched command moves through three
//! states:
//!
//! - **Idle**: awaiting a command
//! - **Running**: the full-table scan, one slot comparison per cycle. The
//!   scan always covers all eight slots, so total latency is independent of
//!   where (or whether) the key is found and does not leak occupancy
//!   through timing
//! - **Publish**: applies the per-opcode policy, produces the response, and
//!   returns to Idle
//!
//! The controller is the sole mutator of the store. Because only one
//! command is ever in flight, the store cannot change between the scan and
//! publish cycles, so the policy is applied in a single pass at publish
//! time.
//!
//! ## Per-Opcode Policy
//!
//! - **LOOKUP(key)**: hit yields `(OK, stored value)`; miss yields
//!   `(NOTFOUND, 0)`
//! - **INSERT(key, value)**: an existing key is overwritten in place
//!   (upsert); otherwise the first invalid slot is occupied; with all eight
//!   slots valid and the key absent, `(FULL, 0)` and the store is unchanged
//! - **DELETE(key)**: hit yields `(OK, value held before deletion)` and
//!   invalidates the slot; miss yields `(NOTFOUND, 0)`, store unchanged

use crate::command::{Command, Opcode};
use crate::latch::{Response, Status};
use crate::store::{CamStore, SLOT_COUNT};

/// Cycles spent in the Running state: one comparison per slot.
pub const SCAN_CYCLES: u8 = SLOT_COUNT as u8;

/// Execution controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    /// Awaiting a latched command.
    Idle,
    /// Scanning the slot table; `cycles_left` comparisons remain.
    Running {
        /// Remaining scan cycles before publish.
        cycles_left: u8,
    },
    /// Applying the opcode policy and producing the response.
    Publish,
}

/// State machine owning the associative store.
///
/// Exposes two equivalent front ends:
///
/// - [`execute`](ExecController::execute): an immediate call returning the
///   response, for hosts that do not need emulated latency
/// - [`accept`](ExecController::accept) / [`step`](ExecController::step):
///   the cycle-stepped path used by the clocked device, where the response
///   becomes observable only after the bounded scan latency
///
/// # Examples
///
/// ```
/// use libcam8::{Command, ExecController, Status};
///
/// let mut controller = ExecController::new();
///
/// let response = controller.execute(Command::insert(0x4, 0x2));
/// assert_eq!(response.status, Status::Ok);
///
/// let response = controller.execute(Command::lookup(0x4));
/// assert_eq!((response.status, response.value), (Status::Ok, 0x2));
/// ```
pub struct ExecController {
    store: CamStore,
    state: ExecState,
    pending: Option<Command>,
}

impl ExecController {
    /// Creates an idle controller over an empty store.
    pub fn new() -> Self {
        Self {
            store: CamStore::new(),
            state: ExecState::Idle,
            pending: None,
        }
    }

    /// Current state machine state.
    pub fn state(&self) -> ExecState {
        self.state
    }

    /// Returns true when no command is in flight.
    pub fn is_idle(&self) -> bool {
        self.state == ExecState::Idle
    }

    /// Read-only view of the store.
    pub fn store(&self) -> &CamStore {
        &self.store
    }

    /// Latches `cmd` and enters the Running state.
    ///
    /// Must only be called while idle; the clocked device answers BUSY to
    /// strobes that arrive in any other state. A command accepted here runs
    /// to completion deterministically; there is no cancellation.
    pub fn accept(&mut self, cmd: Command) {
        debug_assert!(self.is_idle(), "accept while a command is in flight");
        self.pending = Some(cmd);
        self.state = ExecState::Running {
            cycles_left: SCAN_CYCLES,
        };
    }

    /// Advances the state machine by one clock cycle.
    ///
    /// Returns `Some(response)` on the publish cycle and `None` on every
    /// other cycle. Counting from the cycle [`accept`](ExecController::accept)
    /// ran, the response appears exactly `SCAN_CYCLES + 1` steps later.
    pub fn step(&mut self) -> Option<Response> {
        match self.state {
            ExecState::Idle => None,
            ExecState::Running { cycles_left } => {
                if cycles_left > 1 {
                    self.state = ExecState::Running {
                        cycles_left: cycles_left - 1,
                    };
                } else {
                    self.state = ExecState::Publish;
                }
                None
            }
            ExecState::Publish => {
                self.state = ExecState::Idle;
                let cmd = self.pending.take()?;
                Some(self.apply(&cmd))
            }
        }
    }

    /// Runs `cmd` to completion immediately and returns its response.
    ///
    /// This is the software rendition of the command interface: identical
    /// policy, no emulated scan latency. Intended for hosts that use the
    /// store semantics without the clocked protocol; must not be interleaved
    /// with an in-flight clocked command.
    pub fn execute(&mut self, cmd: Command) -> Response {
        self.apply(&cmd)
    }

    /// Forces the controller to Idle, drops any in-flight command, and
    /// invalidates every slot.
    pub fn reset(&mut self) {
        self.state = ExecState::Idle;
        self.pending = None;
        self.store.clear();
    }

    /// Applies the per-opcode policy against the store.
    fn apply(&mut self, cmd: &Command) -> Response {
        match cmd.opcode {
            Opcode::Lookup => match self.store.find(cmd.key) {
                Some(index) => Response::new(Status::Ok, self.store.slots()[index].value),
                None => Response::new(Status::NotFound, 0),
            },
            Opcode::Insert => {
                if let Some(index) = self.store.find(cmd.key) {
                    // Upsert: overwrite in place, occupancy unchanged
                    self.store.fill(index, cmd.key, cmd.value);
                    Response::new(Status::Ok, 0)
                } else if let Some(index) = self.store.first_free() {
                    self.store.fill(index, cmd.key, cmd.value);
                    Response::new(Status::Ok, 0)
                } else {
                    Response::new(Status::Full, 0)
                }
            }
            Opcode::Delete => match self.store.find(cmd.key) {
                Some(index) => {
                    let value = self.store.invalidate(index);
                    Response::new(Status::Ok, value)
                }
                None => Response::new(Status::NotFound, 0),
            },
        }
    }
}

impl Default for ExecController {
    fn default() -> Self {
        Self::new()
    }
}
