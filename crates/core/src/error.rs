use std::fmt;

use crate::types::DataType;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Invalid types for comparison: {left} {op} {right}")]
    InvalidComparison {
        left: DataType,

        op: &'static str,

        right: DataType,
    },

    #[error("Invalid types for arithmetic: {left} {op} {right}")]
    InvalidArithmetic {
        left: DataType,

        op: &'static str,

        right: DataType,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow in {operation}: {left} and {right}")]
    ArithmeticOverflow {
        operation: String,

        left: String,

        right: String,
    },

    #[error("hex string has odd length")]
    OddHexLength,

    #[error("invalid hex character: {0}")]
    InvalidHexCharacter(char),

    #[error("byte range {start}..{end} out of bounds for length {length}")]
    ByteRange {
        start: usize,

        end: usize,

        length: usize,
    },

    #[error("Invalid input for REGEXP_REPLACE: '{0}'")]
    RegexpReplaceInput(String),

    #[error("Invalid regular expression: {0}")]
    InvalidRegex(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn invalid_query(msg: impl fmt::Display) -> Self {
        Error::InvalidQuery(msg.to_string())
    }

    pub fn type_mismatch(expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn type_mismatch_value(expected: impl fmt::Display, value: &crate::types::Value) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            actual: value.data_type().to_string(),
        }
    }

    pub fn invalid_comparison(left: DataType, op: &'static str, right: DataType) -> Self {
        Error::InvalidComparison { left, op, right }
    }

    pub fn invalid_arithmetic(left: DataType, op: &'static str, right: DataType) -> Self {
        Error::InvalidArithmetic { left, op, right }
    }

    pub fn arithmetic_overflow(
        operation: impl fmt::Display,
        left: impl fmt::Display,
        right: impl fmt::Display,
    ) -> Self {
        Error::ArithmeticOverflow {
            operation: operation.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub fn byte_range(start: usize, end: usize, length: usize) -> Self {
        Error::ByteRange { start, end, length }
    }

    pub fn regexp_replace_input(input: impl fmt::Display) -> Self {
        Error::RegexpReplaceInput(input.to_string())
    }
}
