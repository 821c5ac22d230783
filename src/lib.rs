//! SkiffSQL - a scalar-function runtime for SQL query execution.
//!
//! SkiffSQL evaluates built-in SQL operators over operand values
//! produced by a query plan: comparison and arithmetic over the
//! numeric tower (including dynamically-typed `*_any` entry points for
//! operands whose types are only known at evaluation time), calendar
//! conversions between civil fields and Unix-epoch encodings, binary
//! string operations, multiset bag algebra, and the string, encoding,
//! digest and regular-expression function families.
//!
//! The runtime is pure and stateless: every function is a computation
//! over immutable inputs, independently callable from concurrent
//! executor threads. It does not parse SQL, plan queries, or perform
//! I/O.
//!
//! # Example
//!
//! ```rust
//! use skiffsql::comparison::lt_any;
//! use skiffsql::Value;
//!
//! // INT32 and FLOAT64 operands compare exactly through the tower
//! assert!(lt_any(&Value::int32(1), &Value::float64(2.0)).unwrap());
//!
//! // operands with no defined order report a typed failure
//! let err = lt_any(&Value::string("1"), &Value::int64(2)).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid types for comparison: STRING < INT64"
//! );
//! ```

pub use skiffsql_core::error::{Error, Result};
pub use skiffsql_core::types::{ByteString, DataType, Split, Value};
pub use skiffsql_functions::{
    arithmetic, comparison, datetime, encoding, hashing, multiset, regexp, strings,
};
