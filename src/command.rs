//! Command encoding and strobe-edge decoding.
//!
//! The peripheral is driven through a synchronous command interface: every
//! clock cycle the decoder samples an opcode field, a level-held "go" line,
//! and a data field carrying the key (and, for INSERT, the value). A command
//! is recognized only on a rising transition of "go"; holding the line high
//! produces no repeated triggering.
//!
//! ## Input Pin Map
//!
//! The byte-level packing mirrors the hardware harness this device was
//! verified against:
//!
//! | Field        | Bits      | Description                      |
//! |--------------|-----------|----------------------------------|
//! | data         | 7:4       | key                              |
//! | data         | 3:0       | value (meaningful for INSERT)    |
//! | ctrl         | 2         | go strobe (rising-edge triggered)|
//! | ctrl         | 1:0       | opcode                           |

use crate::store::{KEY_MASK, VALUE_MASK};
use crate::CommandError;

/// Command opcodes as encoded on the 2-bit opcode field.
///
/// The encoding 3 is reserved. Its behavior is not defined by the device
/// contract beyond store integrity; [`Opcode::from_bits`] reports it as
/// [`CommandError::ReservedOpcode`] rather than aliasing an existing
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Read the value stored under a key.
    Lookup = 0,
    /// Store a value under a key, overwriting in place if the key exists.
    Insert = 1,
    /// Remove a key, reporting the value it held.
    Delete = 2,
}

impl Opcode {
    /// Encoding on the 2-bit opcode field.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes the low two bits of `bits`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ReservedOpcode`] for the reserved encoding 3.
    pub fn from_bits(bits: u8) -> Result<Opcode, CommandError> {
        match bits & 0b11 {
            0 => Ok(Opcode::Lookup),
            1 => Ok(Opcode::Insert),
            2 => Ok(Opcode::Delete),
            other => Err(CommandError::ReservedOpcode(other)),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Opcode::Lookup => "LOOKUP",
            Opcode::Insert => "INSERT",
            Opcode::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

/// A well-formed command, ready for the execution controller.
///
/// Commands are ephemeral: constructed from sampled inputs, consumed by the
/// controller, and discarded after producing one response. Key and value are
/// masked to 4 bits on construction.
///
/// # Examples
///
/// ```
/// use libcam8::{Command, Opcode};
///
/// let cmd = Command::insert(0x4, 0x2);
/// assert_eq!(cmd.opcode, Opcode::Insert);
///
/// // Wide inputs are masked, matching 4-bit hardware fields
/// let cmd = Command::lookup(0xF4);
/// assert_eq!(cmd.key, 0x4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Operation to perform.
    pub opcode: Opcode,
    /// 4-bit key.
    pub key: u8,
    /// 4-bit value; meaningful only for INSERT.
    pub value: u8,
}

impl Command {
    /// Builds a command, masking key and value to 4 bits.
    pub fn new(opcode: Opcode, key: u8, value: u8) -> Self {
        Self {
            opcode,
            key: key & KEY_MASK,
            value: value & VALUE_MASK,
        }
    }

    /// LOOKUP of `key`.
    pub fn lookup(key: u8) -> Self {
        Self::new(Opcode::Lookup, key, 0)
    }

    /// INSERT of `value` under `key`.
    pub fn insert(key: u8, value: u8) -> Self {
        Self::new(Opcode::Insert, key, value)
    }

    /// DELETE of `key`.
    pub fn delete(key: u8) -> Self {
        Self::new(Opcode::Delete, key, 0)
    }
}

/// One clock cycle's worth of sampled input lines.
///
/// `Default` yields the idle bus: all lines low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusInputs {
    /// Synchronous reset line (active high). Overrides everything else.
    pub reset: bool,
    /// Command strobe. A command is accepted on its rising edge only.
    pub go: bool,
    /// Raw 2-bit opcode field.
    pub opcode: u8,
    /// Key field (sampled as 4 bits).
    pub key: u8,
    /// Value field (sampled as 4 bits).
    pub value: u8,
}

impl BusInputs {
    /// Decodes packed input pins: `data` carries key/value nibbles, `ctrl`
    /// carries the strobe and opcode bits (see the module pin map).
    pub fn from_pins(data: u8, ctrl: u8, reset: bool) -> Self {
        Self {
            reset,
            go: ctrl & 0b100 != 0,
            opcode: ctrl & 0b11,
            key: data >> 4,
            value: data & VALUE_MASK,
        }
    }

    /// Inputs presenting `cmd` with the strobe asserted.
    ///
    /// The host must drive at least one cycle with the strobe deasserted
    /// before this produces a new rising edge.
    pub fn strobe(cmd: &Command) -> Self {
        Self {
            reset: false,
            go: true,
            opcode: cmd.opcode.bits(),
            key: cmd.key,
            value: cmd.value,
        }
    }
}

/// Samples the input lines each cycle and latches a well-formed command on a
/// rising strobe edge.
pub struct CommandDecoder {
    prev_go: bool,
}

impl CommandDecoder {
    /// Creates a decoder with the strobe history low.
    pub fn new() -> Self {
        Self { prev_go: false }
    }

    /// Samples one cycle of inputs.
    ///
    /// Returns `Ok(Some(command))` on a rising strobe edge carrying a
    /// defined opcode and `Ok(None)` otherwise. A level-held strobe never
    /// retriggers; the host must deassert and reassert to issue again.
    ///
    /// # Errors
    ///
    /// A rising edge carrying the reserved opcode consumes the edge (the
    /// strobe history advances) but latches nothing, and reports
    /// [`CommandError::ReservedOpcode`]. The store is never touched on this
    /// path.
    pub fn sample(&mut self, inputs: &BusInputs) -> Result<Option<Command>, CommandError> {
        let rising = inputs.go && !self.prev_go;
        self.prev_go = inputs.go;

        if !rising {
            return Ok(None);
        }

        let opcode = Opcode::from_bits(inputs.opcode)?;
        Ok(Some(Command::new(opcode, inputs.key, inputs.value)))
    }

    /// Tracks the strobe level without edge detection.
    ///
    /// Used while reset is asserted, so that releasing reset with the strobe
    /// held high does not manufacture a spurious edge.
    pub fn sync(&mut self, go: bool) {
        self.prev_go = go;
    }
}

impl Default for CommandDecoder {
    fn default() -> Self {
        Self::new()
    }
}
