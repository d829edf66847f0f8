//! Axis query values.

use serde::{Deserialize, Serialize};

/// A query over axis units of a given variable type.
///
/// `low_range`/`high_range` describe the interval of interest and are carried
/// with the query, but they are currently reserved: only `var_type` gates a
/// match, because units do not yet declare the per-axis interval metadata
/// the bounds would be compared against. See
/// [`UnitScanner::find_axis_units_by_var_type`](super::UnitScanner::find_axis_units_by_var_type).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    /// Variable type the axis must declare (`VARTYPE`).
    pub var_type: u32,
    /// Lower bound of the interval of interest. Reserved, not applied.
    pub low_range: f32,
    /// Upper bound of the interval of interest. Reserved, not applied.
    pub high_range: f32,
}

impl AxisRange {
    /// Creates a query for axes of `var_type` covering `[low_range, high_range]`.
    pub fn new(var_type: u32, low_range: f32, high_range: f32) -> Self {
        Self { var_type, low_range, high_range }
    }
}
