//! In-memory reference container backend.
//!
//! This module provides [`MemContainer`], a [`Container`] implementation
//! backed by a plain vector of units. It exists for two reasons:
//! - the crate's own tests need a container without a file-format backend
//! - downstream code can assemble synthetic containers (e.g. deserialized
//!   from JSON fixtures) and run the scanner against them
//!
//! The on-disk encoding of a unit is a separate backend concern and is not
//! handled here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::container::{Container, UnitKind, UnitPos};
use crate::{GirfError, Result};

/// One in-memory header-data unit: a kind plus keyword/value metadata.
///
/// Keyword order is preserved, matching the ordered nature of a real unit
/// header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemUnit {
    /// Physical kind of the unit.
    pub kind: UnitKind,
    /// Keyword/value metadata of the unit, in header order.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

impl MemUnit {
    /// Creates an empty table unit.
    pub fn table() -> Self {
        Self { kind: UnitKind::Table, metadata: IndexMap::new() }
    }

    /// Creates an empty image unit.
    pub fn image() -> Self {
        Self { kind: UnitKind::Image, metadata: IndexMap::new() }
    }

    /// Creates an empty unit of an unclassified kind.
    pub fn other() -> Self {
        Self { kind: UnitKind::Other, metadata: IndexMap::new() }
    }

    /// Adds a keyword/value pair, replacing any previous value.
    pub fn with_keyword<K: Into<String>, V: Into<String>>(mut self, keyword: K, value: V) -> Self {
        self.metadata.insert(keyword.into(), value.into());
        self
    }
}

/// In-memory [`Container`] over a vector of [`MemUnit`]s.
///
/// A freshly constructed container selects the first unit, mirroring the
/// post-open state of a file backend. An empty container has no selectable
/// unit and reports position 0.
#[derive(Debug, Clone, Default)]
pub struct MemContainer {
    units: Vec<MemUnit>,
    position: UnitPos,
}

impl MemContainer {
    /// Creates a container over `units`, cursor on the first unit if any.
    pub fn new(units: Vec<MemUnit>) -> Self {
        let position = if units.is_empty() { 0 } else { 1 };
        Self { units, position }
    }

    fn current_unit(&self) -> Result<&MemUnit> {
        if self.position == 0 {
            return Err(GirfError::invalid_parameter("No unit selected (container is empty)"));
        }
        Ok(&self.units[(self.position - 1) as usize])
    }
}

impl Container for MemContainer {
    fn unit_count(&self) -> Result<u32> {
        Ok(self.units.len() as u32)
    }

    fn move_to(&mut self, position: UnitPos) -> Result<UnitKind> {
        if position == 0 || position > self.units.len() as u32 {
            return Err(GirfError::out_of_range(position, self.units.len() as u32));
        }
        self.position = position;
        Ok(self.units[(position - 1) as usize].kind)
    }

    fn read_keyword(&self, keyword: &str) -> Result<Option<String>> {
        Ok(self.current_unit()?.metadata.get(keyword).cloned())
    }

    fn current_position(&self) -> UnitPos {
        self.position
    }
}
