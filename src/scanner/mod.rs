// Unit classification and traversal
//
// This module provides the scan-and-filter logic that locates axis and data
// units inside an IRF container: the classification predicates, the lenient
// and strict metadata integer parsers, and the UnitScanner entry points.

pub mod keyword;
pub mod classify;
pub mod axis_range;
pub mod unit_scanner;

pub use keyword::{ParseMode, KEY_CLASS, KEY_CLASS_ID, KEY_VAR_TYPE, CLASS_AXIS, CLASS_DATA};
pub use classify::UnitClass;
pub use axis_range::AxisRange;
pub use unit_scanner::UnitScanner;
