//! Classification keywords and metadata value parsing.
//!
//! Units announce their role through a small set of classification keywords.
//! Identifier values are stored as strings and extracted by parsing them as
//! base-10 integers; existing containers occasionally carry non-numeric
//! placeholder strings, so the historical policy is to coerce an unparsable
//! value to 0 rather than fail. [`ParseMode`] makes that coercion an explicit
//! choice: [`ParseMode::Lenient`] keeps it, [`ParseMode::Strict`] surfaces a
//! [`MalformedMetadata`](crate::GirfError::MalformedMetadata) error instead.

use crate::{GirfError, Result};

/// Keyword carrying the unit's role within the container.
pub const KEY_CLASS: &str = "HDUCLAS2";
/// Keyword carrying the identifying integer of a classified unit.
pub const KEY_CLASS_ID: &str = "HDUCLAS4";
/// Keyword carrying the variable type of an axis unit.
pub const KEY_VAR_TYPE: &str = "VARTYPE";

/// Role value marking an axis-definition unit (tables only).
pub const CLASS_AXIS: &str = "AXIS";
/// Role value marking a data-payload unit (images only).
pub const CLASS_DATA: &str = "DATA";

/// Policy for extracting classification integers from keyword values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// atoi-style parse: the leading run of digits after optional leading
    /// whitespace; no digits (or overflow) yields 0. Never fails.
    #[default]
    Lenient,
    /// The whole trimmed value must parse as a base-10 integer; anything
    /// else is a `MalformedMetadata` error.
    Strict,
}

impl ParseMode {
    /// Extracts a classification integer from a raw keyword value under
    /// this parse mode.
    ///
    /// # Errors
    ///
    /// In strict mode, returns `MalformedMetadata` naming the keyword and
    /// the offending value.
    pub fn class_int(&self, keyword: &str, value: &str) -> Result<u32> {
        match self {
            ParseMode::Lenient => Ok(lenient_class_int(value)),
            ParseMode::Strict => strict_class_int(keyword, value),
        }
    }
}

/// Parses the leading digit run of `value` as a base-10 integer, 0 when
/// there is none.
pub fn lenient_class_int(value: &str) -> u32 {
    let digits: &str = {
        let trimmed = value.trim_start();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };
    digits.parse::<u32>().unwrap_or(0)
}

/// Parses the whole trimmed `value` as a base-10 integer.
///
/// # Errors
///
/// Returns `MalformedMetadata` when the value does not parse.
pub fn strict_class_int(keyword: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| GirfError::malformed_metadata(keyword, value))
}
