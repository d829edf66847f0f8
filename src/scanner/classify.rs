//! Derived classification of the current unit.

use crate::container::{Container, UnitKind};
use crate::Result;

use super::keyword::{CLASS_AXIS, CLASS_DATA, KEY_CLASS};

/// Role of a unit, derived from its kind and the `HDUCLAS2` keyword.
///
/// A unit is an axis unit iff it is a table tagged `AXIS`, and a data unit
/// iff it is an image tagged `DATA`. Any other combination (including an
/// absent `HDUCLAS2`) classifies as [`UnitClass::Other`] and is skipped by
/// every scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// Axis-definition unit: one coordinate axis of a response table.
    Axis,
    /// Data-payload unit: a table/pdf indexed by axes.
    Data,
    /// Everything the scanner does not classify.
    Other,
}

/// Classifies the unit currently selected by the container's cursor.
///
/// `kind` is the kind reported by the `move_to` that selected the unit; the
/// role keyword is only read for kinds that can carry a classification.
///
/// # Errors
///
/// Propagates transport-level failures from the keyword read. An absent
/// keyword is not an error.
pub fn classify_current<C: Container>(container: &C, kind: UnitKind) -> Result<UnitClass> {
    let class = match kind {
        UnitKind::Table => match container.read_keyword(KEY_CLASS)? {
            Some(role) if role == CLASS_AXIS => UnitClass::Axis,
            _ => UnitClass::Other,
        },
        UnitKind::Image => match container.read_keyword(KEY_CLASS)? {
            Some(role) if role == CLASS_DATA => UnitClass::Data,
            _ => UnitClass::Other,
        },
        UnitKind::Other => UnitClass::Other,
    };
    Ok(class)
}
