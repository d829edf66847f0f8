// Container abstraction over IRF response files
//
// This module provides the contract the scanner operates against: an ordered,
// 1-indexed sequence of header-data units with a shared position cursor, plus
// an in-memory reference backend used for tests and format-independent callers.

pub mod unit;
pub mod mem_container;

pub use unit::{UnitKind, UnitPos};
pub use mem_container::{MemContainer, MemUnit};

use crate::Result;

/// Contract for an open IRF container handle.
///
/// A container is an ordered, 1-indexed sequence of header-data units with a
/// single shared cursor ("current position"). Every traversal operation in
/// this crate mutates that cursor, so a handle must be exclusively owned by
/// one scanning call at a time; callers needing concurrent scans over the
/// same logical data must open independent handles.
///
/// Keyword reads apply to the unit the cursor currently selects. An absent
/// keyword is `Ok(None)`, distinct from a transport-level read failure.
pub trait Container {
    /// Number of units in the container.
    fn unit_count(&self) -> Result<u32>;

    /// Moves the cursor to `position` (1-indexed) and returns the kind of
    /// the unit found there.
    ///
    /// # Errors
    ///
    /// Returns [`GirfError::OutOfRange`](crate::GirfError::OutOfRange) if
    /// `position` is 0 or past the last unit, or
    /// [`GirfError::Io`](crate::GirfError::Io) on a transport failure.
    fn move_to(&mut self, position: UnitPos) -> Result<UnitKind>;

    /// Reads a keyword's string value from the current unit's metadata.
    ///
    /// Returns `Ok(None)` when the keyword is not present.
    fn read_keyword(&self, keyword: &str) -> Result<Option<String>>;

    /// Current cursor position (1-indexed; 0 when no unit is selected).
    fn current_position(&self) -> UnitPos;
}
