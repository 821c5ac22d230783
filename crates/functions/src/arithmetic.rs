//! Dynamically-typed arithmetic dispatch and scalar rounding.
//!
//! The `*_any` operators promote any mix of the numeric
//! representations to an exact decimal and always produce a `NUMERIC`
//! result. The rounding family (`floor`/`ceil`/`truncate`/`round` to a
//! multiple, `struncate`/`sround` to a decimal place) mirrors the SQL
//! `FLOOR(x TO y)` / `TRUNCATE(x, s)` / `ROUND(x, s)` forms.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use skiffsql_core::error::{Error, Result};
use skiffsql_core::types::Value;

use crate::comparison::to_decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithOp {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl ArithOp {
    fn symbol(self) -> &'static str {
        match self {
            ArithOp::Plus => "+",
            ArithOp::Minus => "-",
            ArithOp::Multiply => "*",
            ArithOp::Divide => "/",
        }
    }
}

fn arith_any(b0: &Value, b1: &Value, op: ArithOp) -> Result<Value> {
    if b0.is_null() || b1.is_null() {
        return Ok(Value::Null);
    }
    let (a, b) = match (to_decimal(b0)?, to_decimal(b1)?) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(Error::invalid_arithmetic(
                b0.data_type(),
                op.symbol(),
                b1.data_type(),
            ));
        }
    };
    let result = match op {
        ArithOp::Plus => a.checked_add(b),
        ArithOp::Minus => a.checked_sub(b),
        ArithOp::Multiply => a.checked_mul(b),
        ArithOp::Divide => {
            if b.is_zero() {
                return Err(Error::DivisionByZero);
            }
            a.checked_div(b)
        }
    };
    result
        .map(Value::numeric)
        .ok_or_else(|| Error::arithmetic_overflow(op.symbol(), a, b))
}

pub fn plus_any(b0: &Value, b1: &Value) -> Result<Value> {
    arith_any(b0, b1, ArithOp::Plus)
}

pub fn minus_any(b0: &Value, b1: &Value) -> Result<Value> {
    arith_any(b0, b1, ArithOp::Minus)
}

pub fn multiply_any(b0: &Value, b1: &Value) -> Result<Value> {
    arith_any(b0, b1, ArithOp::Multiply)
}

pub fn divide_any(b0: &Value, b1: &Value) -> Result<Value> {
    arith_any(b0, b1, ArithOp::Divide)
}

/// Largest multiple of `y` at or below `x`. `y` must be positive.
pub fn floor(x: i64, y: i64) -> i64 {
    let mut r = x % y;
    if r < 0 {
        r += y;
    }
    x - r
}

/// Smallest multiple of `y` at or above `x`. `y` must be positive.
pub fn ceil(x: i64, y: i64) -> i64 {
    let mut r = x % y;
    if r > 0 {
        r -= y;
    }
    x - r
}

pub fn floor_numeric(x: Decimal, y: Decimal) -> Decimal {
    let mut r = x % y;
    if r.is_sign_negative() && !r.is_zero() {
        r += y;
    }
    x - r
}

pub fn ceil_numeric(x: Decimal, y: Decimal) -> Decimal {
    let mut r = x % y;
    if r.is_sign_positive() && !r.is_zero() {
        r -= y;
    }
    x - r
}

/// Floors to a multiple of `x`; for negative values this rounds away
/// from zero, matching SQL TRUNCATE over exact numerics.
pub fn truncate(v: i64, x: i64) -> i64 {
    floor(v, x)
}

/// Rounds half-up to a multiple of `x`.
pub fn round(v: i64, x: i64) -> i64 {
    truncate(v + x / 2, x)
}

/// Truncates toward zero at decimal place `s`; a negative `s` zeroes
/// digits left of the point.
pub fn struncate(v: f64, s: i32) -> f64 {
    let d = match Decimal::from_f64(v) {
        Some(d) => d,
        None => return v,
    };
    let result = if s >= 0 {
        d.trunc_with_scale(s.min(28) as u32)
    } else {
        match pow10(-s) {
            Some(factor) => (d / factor).trunc() * factor,
            None => Decimal::ZERO,
        }
    };
    result.to_f64().unwrap_or(v)
}

/// Rounds half away from zero at decimal place `s`; a negative `s`
/// rounds digits left of the point.
pub fn sround(v: f64, s: i32) -> f64 {
    let d = match Decimal::from_f64(v) {
        Some(d) => d,
        None => return v,
    };
    let result = if s >= 0 {
        d.round_dp_with_strategy(s.min(28) as u32, RoundingStrategy::MidpointAwayFromZero)
    } else {
        match pow10(-s) {
            Some(factor) => {
                let scaled =
                    (d / factor).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                scaled * factor
            }
            None => Decimal::ZERO,
        }
    };
    result.to_f64().unwrap_or(v)
}

pub fn struncate_numeric(v: Decimal, s: i32) -> Decimal {
    if s >= 0 {
        v.trunc_with_scale(s.min(28) as u32)
    } else {
        match pow10(-s) {
            Some(factor) => (v / factor).trunc() * factor,
            None => Decimal::ZERO,
        }
    }
}

pub fn sround_numeric(v: Decimal, s: i32) -> Decimal {
    if s >= 0 {
        v.round_dp_with_strategy(s.min(28) as u32, RoundingStrategy::MidpointAwayFromZero)
    } else {
        match pow10(-s) {
            Some(factor) => {
                (v / factor).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    * factor
            }
            None => Decimal::ZERO,
        }
    }
}

// 10^exp as an exact decimal; beyond 28 digits the quotient underflows
// to zero anyway.
fn pow10(exp: i32) -> Option<Decimal> {
    if exp < 0 || exp > 28 {
        return None;
    }
    Some(Decimal::from_i128_with_scale(10i128.pow(exp as u32), 0))
}
