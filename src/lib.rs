//! # girf-scan - IRF Container Unit Navigation
//!
//! This crate provides the unit-classification and traversal logic used to
//! navigate instrument response function (IRF) containers: ordered sequences
//! of self-describing header-data units holding the axes and data payloads
//! of multi-dimensional response tables.
//!
//! ## Features
//!
//! - **Unit classification**: derive a unit's role (axis definition vs. data
//!   payload) from its kind and classification keywords
//! - **ID queries**: largest axis/data ID in a container, with the legacy 0
//!   sentinel preserved for ID-allocation callers
//! - **Position queries**: locate the last axis unit or a data unit by ID,
//!   with documented terminal cursor states
//! - **Variable-type queries**: collect the deduplicated ID set of every
//!   axis declaring a given variable type
//! - **Lenient and strict metadata parsing**: keep the historical
//!   coerce-to-0 policy or surface malformed values as errors
//!
//! ## Quick Start
//!
//! ```
//! use girf_scan::{MemContainer, MemUnit, UnitScanner};
//!
//! # fn main() -> girf_scan::Result<()> {
//! // Assemble a container: one axis definition, one data payload
//! let mut container = MemContainer::new(vec![
//!     MemUnit::table()
//!         .with_keyword("HDUCLAS2", "AXIS")
//!         .with_keyword("HDUCLAS4", "1")
//!         .with_keyword("VARTYPE", "1"),
//!     MemUnit::image()
//!         .with_keyword("HDUCLAS2", "DATA")
//!         .with_keyword("HDUCLAS4", "1"),
//! ]);
//!
//! let scanner = UnitScanner::new();
//! let axis_position = scanner.last_axis_unit(&mut container)?;
//! let data_position = scanner.find_data_unit_by_id(&mut container, 1)?;
//! println!("axis at {}, data at {}", axis_position, data_position);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`container`]: the [`Container`] contract (unit count, cursor moves,
//!   keyword reads) and an in-memory reference backend; file-format backends
//!   implement the trait outside this crate
//! - [`scanner`]: classification predicates, metadata integer parsing, and
//!   the [`UnitScanner`] query entry points
//!
//! ## Concurrency
//!
//! All operations are synchronous and blocking. The container cursor is
//! shared mutable state with no internal locking, so a handle must not be
//! scanned from multiple threads; open independent handles instead.
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are
//! represented by [`GirfError`]. The crate uses the `snafu` library for
//! ergonomic error handling with context and backtraces. Transport failures
//! propagate; a predicate miss is [`GirfError::NotFound`]; an absent keyword
//! is never an error.

pub mod container;
pub mod error;
pub mod scanner;

// Re-export commonly used types for convenience
pub use container::{Container, MemContainer, MemUnit, UnitKind, UnitPos};
pub use scanner::{AxisRange, ParseMode, UnitClass, UnitScanner};

// Re-export error types for convenience
pub use error::{GirfError, Result, snafu};
