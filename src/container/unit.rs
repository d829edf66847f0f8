//! Unit kinds and positions.

use serde::{Deserialize, Serialize};

/// 1-indexed position of a unit within a container.
pub type UnitPos = u32;

/// Physical kind of a header-data unit.
///
/// The scanner only distinguishes tables and images; every other kind is
/// reported as [`UnitKind::Other`] and skipped during scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitKind {
    /// Binary table unit. Axis definitions are stored as tables.
    Table,
    /// Image unit. Data payloads are stored as images.
    Image,
    /// Any unit kind the scanner does not classify.
    #[default]
    Other,
}

impl UnitKind {
    /// Checks if this kind can carry an axis definition.
    pub fn is_table(&self) -> bool {
        self == &UnitKind::Table
    }

    /// Checks if this kind can carry a data payload.
    pub fn is_image(&self) -> bool {
        self == &UnitKind::Image
    }
}
