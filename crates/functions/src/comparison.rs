//! Dynamically-typed comparison dispatch.
//!
//! The `*_any` entry points accept operands whose types are only known
//! at evaluation time. Equality is total; the ordered comparisons
//! report a structured type error for operand combinations with no
//! defined order.

use std::cmp::Ordering;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use skiffsql_core::error::{Error, Result};
use skiffsql_core::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

/// Widens a numeric operand to the tower's decimal representation.
/// `Ok(None)` means the operand is not numeric; a float with no finite
/// decimal form is a domain error.
pub(crate) fn to_decimal(value: &Value) -> Result<Option<Decimal>> {
    match value {
        Value::Int32(v) => Ok(Some(Decimal::from(*v))),
        Value::Int64(v) => Ok(Some(Decimal::from(*v))),
        Value::Float64(v) => Decimal::from_f64(v.0).map(Some).ok_or_else(|| {
            Error::invalid_query(format!("FLOAT64 value {} has no NUMERIC representation", v))
        }),
        Value::Numeric(v) => Ok(Some(*v)),
        _ => Ok(None),
    }
}

fn compare_any(b0: &Value, b1: &Value, op: CompareOp) -> Result<bool> {
    let ordering = match (b0, b1) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int32(a), Value::Int32(b)) => a.cmp(b),
        (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.cmp(b),
        (Value::Numeric(a), Value::Numeric(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::Time(a), Value::Time(b)) => a.cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        _ => match (to_decimal(b0)?, to_decimal(b1)?) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => {
                return Err(Error::invalid_comparison(
                    b0.data_type(),
                    op.symbol(),
                    b1.data_type(),
                ));
            }
        },
    };
    Ok(op.holds(ordering))
}

/// Equality over operands of runtime-determined type. Same runtime
/// type compares natively, mixed numeric representations compare as
/// exact decimals, and any other combination is simply not equal.
pub fn eq_any(b0: &Value, b1: &Value) -> bool {
    if b0.data_type() == b1.data_type() {
        return b0 == b1;
    }
    match (decimal_or_none(b0), decimal_or_none(b1)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

pub fn ne_any(b0: &Value, b1: &Value) -> bool {
    !eq_any(b0, b1)
}

pub fn lt_any(b0: &Value, b1: &Value) -> Result<bool> {
    compare_any(b0, b1, CompareOp::Lt)
}

pub fn le_any(b0: &Value, b1: &Value) -> Result<bool> {
    compare_any(b0, b1, CompareOp::Le)
}

pub fn gt_any(b0: &Value, b1: &Value) -> Result<bool> {
    compare_any(b0, b1, CompareOp::Gt)
}

pub fn ge_any(b0: &Value, b1: &Value) -> Result<bool> {
    compare_any(b0, b1, CompareOp::Ge)
}

fn decimal_or_none(value: &Value) -> Option<Decimal> {
    to_decimal(value).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_symmetric() {
        let one = Value::int32(1);
        let two = Value::float64(2.0);
        assert!(lt_any(&one, &two).unwrap());
        assert!(gt_any(&two, &one).unwrap());
        assert_eq!(lt_any(&one, &two).unwrap(), gt_any(&two, &one).unwrap());
    }

    #[test]
    fn test_null_comparison_is_a_type_error() {
        let err = lt_any(&Value::Null, &Value::int64(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid types for comparison: UNKNOWN < INT64"
        );
    }

    #[test]
    fn test_eq_is_total() {
        assert!(eq_any(&Value::Null, &Value::Null));
        assert!(!eq_any(&Value::Null, &Value::int64(0)));
        assert!(!eq_any(&Value::string("2"), &Value::int64(2)));
    }
}
