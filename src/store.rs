//! Associative store backing the CAM peripheral.
//!
//! The store is a fixed table of eight key/value slots searched by exhaustive
//! comparison. There is no hashing or index computation: capacity and
//! comparison semantics are part of the observable device contract, so the
//! structure behaves as a small content-addressable table rather than a hash
//! map.
//!
//! ## Design Principles
//!
//! The store follows the hardware it models:
//! - Keys and values are 4-bit quantities; wider inputs are masked, never
//!   rejected (hardware samples four wires)
//! - At most one valid slot holds a given key
//! - Slot order carries no meaning beyond capacity accounting
//! - Only the execution controller mutates slots; everything else gets
//!   read-only views

/// Number of key/value slots in the store.
pub const SLOT_COUNT: usize = 8;

/// Mask applied to every key before storage or comparison.
pub const KEY_MASK: u8 = 0x0F;

/// Mask applied to every value before storage.
pub const VALUE_MASK: u8 = 0x0F;

/// One storage location: a validity bit plus a key/value pair.
///
/// Invalid slots retain their last key/value bits, matching hardware
/// registers that are not cleared on invalidation. Only `valid` determines
/// membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slot {
    /// True while this slot holds a live entry.
    pub valid: bool,
    /// 4-bit key (upper bits always zero).
    pub key: u8,
    /// 4-bit value (upper bits always zero).
    pub value: u8,
}

/// Fixed-capacity associative table of eight slots.
///
/// The store is created empty and is mutated only through the execution
/// controller (insert occupies a slot, delete clears its validity bit) or by
/// reset, which invalidates every slot atomically.
///
/// # Examples
///
/// ```
/// use libcam8::CamStore;
///
/// let store = CamStore::new();
/// assert_eq!(store.occupancy(), 0);
/// assert_eq!(store.get(0x4), None);
/// ```
pub struct CamStore {
    slots: [Slot; SLOT_COUNT],
}

impl CamStore {
    /// Creates an empty store with all slots invalid.
    pub fn new() -> Self {
        Self {
            slots: [Slot::default(); SLOT_COUNT],
        }
    }

    /// Invalidates every slot. Key/value bits are left as-is.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.valid = false;
        }
    }

    /// Returns the value stored under `key`, if any.
    ///
    /// This is a read-only convenience for hosts and tests; the device
    /// protocol itself reports lookups through the result latch.
    ///
    /// # Examples
    ///
    /// ```
    /// use libcam8::{Command, ExecController};
    ///
    /// let mut controller = ExecController::new();
    /// controller.execute(Command::insert(0x4, 0x2));
    /// assert_eq!(controller.store().get(0x4), Some(0x2));
    /// assert_eq!(controller.store().get(0x5), None);
    /// ```
    pub fn get(&self, key: u8) -> Option<u8> {
        self.find(key).map(|index| self.slots[index].value)
    }

    /// Returns true if a valid slot holds `key`.
    pub fn contains(&self, key: u8) -> bool {
        self.find(key).is_some()
    }

    /// Number of valid slots (0..=8).
    pub fn occupancy(&self) -> usize {
        self.slots.iter().filter(|slot| slot.valid).count()
    }

    /// Returns true when all eight slots are valid.
    pub fn is_full(&self) -> bool {
        self.occupancy() == SLOT_COUNT
    }

    /// Read-only view of the slot array, for inspection and testing.
    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    /// Scans all slots for a valid entry matching `key`.
    ///
    /// The scan always has a bounded cost: eight comparisons, independent of
    /// where (or whether) the key is found.
    pub(crate) fn find(&self, key: u8) -> Option<usize> {
        let key = key & KEY_MASK;
        self.slots
            .iter()
            .position(|slot| slot.valid && slot.key == key)
    }

    /// Index of the first invalid slot, if any.
    pub(crate) fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.valid)
    }

    /// Occupies `index` with a masked key/value pair and marks it valid.
    pub(crate) fn fill(&mut self, index: usize, key: u8, value: u8) {
        self.slots[index] = Slot {
            valid: true,
            key: key & KEY_MASK,
            value: value & VALUE_MASK,
        };
    }

    /// Marks `index` invalid and returns the value it held.
    pub(crate) fn invalidate(&mut self, index: usize) -> u8 {
        self.slots[index].valid = false;
        self.slots[index].value
    }
}

impl Default for CamStore {
    fn default() -> Self {
        Self::new()
    }
}
