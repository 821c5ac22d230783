//! SQL operator implementations for SkiffSQL.
//!
//! Entry points are grouped by concern: dynamically-typed comparison
//! and arithmetic dispatch, calendar/epoch conversion, multiset bag
//! algebra, and the string/encoding/digest/regex function families.
//! Everything here is a pure function over immutable operands; errors
//! are reported through [`skiffsql_core::error::Error`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![allow(missing_docs)]

pub mod arithmetic;
pub mod comparison;
pub mod datetime;
pub mod encoding;
pub mod hashing;
pub mod multiset;
pub mod regexp;
pub mod strings;
