//! Calendar/epoch conversion.
//!
//! Canonical stored encodings are `i32` days since 1970-01-01 (Unix
//! date), `i32` milliseconds since midnight (Unix time) and `i64`
//! milliseconds since the epoch (Unix timestamp), all in the proleptic
//! Gregorian calendar: Gregorian leap-year rules extended backward
//! uniformly, with no special case around the historical 1582 calendar
//! reform. The legacy civil labels 1582-10-05 through 1582-10-14 name
//! real, distinct days here.
//!
//! Zone-aware conversions take an explicit [`TimeZone`] parameter that
//! supplies the offset at each instant; no ambient default zone is
//! consulted anywhere. The zone-less functions are the UTC case.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use skiffsql_core::error::{Error, Result};
use skiffsql_core::types::Value;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

fn unix_epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("1970-01-01 is a valid date")
}

fn midnight() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 is a valid time")
}

/// Civil date to days since the epoch.
pub fn date_to_unix_date(date: NaiveDate) -> i32 {
    date.signed_duration_since(unix_epoch_date()).num_days() as i32
}

/// Days since the epoch to civil date.
pub fn unix_date_to_date(days: i32) -> Result<NaiveDate> {
    unix_epoch_date()
        .checked_add_signed(Duration::days(days as i64))
        .ok_or_else(|| Error::invalid_query(format!("Unix date out of range: {}", days)))
}

/// Time of day to milliseconds since midnight; sub-millisecond
/// precision is truncated.
pub fn time_to_unix_time(time: NaiveTime) -> i32 {
    time.signed_duration_since(midnight()).num_milliseconds() as i32
}

/// Milliseconds since midnight to time of day.
pub fn unix_time_to_time(millis: i32) -> Result<NaiveTime> {
    if millis < 0 || millis as i64 >= MILLIS_PER_DAY {
        return Err(Error::invalid_query(format!(
            "Unix time out of range: {}",
            millis
        )));
    }
    let seconds = (millis / 1_000) as u32;
    let nanos = (millis % 1_000) as u32 * 1_000_000;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos)
        .ok_or_else(|| Error::invalid_query(format!("Unix time out of range: {}", millis)))
}

/// Civil timestamp to milliseconds since the epoch.
pub fn timestamp_to_unix_timestamp(ts: NaiveDateTime) -> i64 {
    ts.and_utc().timestamp_millis()
}

/// Milliseconds since the epoch to civil timestamp.
pub fn unix_timestamp_to_timestamp(millis: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| Error::invalid_query(format!("Unix timestamp out of range: {}", millis)))
}

/// Local wall-clock timestamp in `zone` to the UTC epoch value, using
/// the zone's offset at that instant. An ambiguous wall clock resolves
/// to the earlier offset; a wall clock skipped by a transition is an
/// error.
pub fn timestamp_with_zone_to_unix_timestamp<Tz: TimeZone>(
    local: NaiveDateTime,
    zone: &Tz,
) -> Result<i64> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp_millis()),
        LocalResult::None => Err(Error::invalid_query(format!(
            "local time {} does not exist in this time zone",
            local
        ))),
    }
}

/// Local calendar date in `zone` to the Unix day containing the UTC
/// instant of its midnight.
pub fn date_with_zone_to_unix_date<Tz: TimeZone>(date: NaiveDate, zone: &Tz) -> Result<i32> {
    let millis = timestamp_with_zone_to_unix_timestamp(date.and_time(midnight()), zone)?;
    Ok(millis.div_euclid(MILLIS_PER_DAY) as i32)
}

/// The local wall-clock timestamp that `zone` observes at the given
/// UTC epoch value.
pub fn unix_timestamp_to_local_timestamp<Tz: TimeZone>(
    millis: i64,
    zone: &Tz,
) -> Result<NaiveDateTime> {
    let utc = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| Error::invalid_query(format!("Unix timestamp out of range: {}", millis)))?;
    Ok(utc.with_timezone(zone).naive_local())
}

/// The local calendar date that `zone` observes at the given UTC epoch
/// value, as a Unix day.
pub fn unix_date_at_zone<Tz: TimeZone>(millis: i64, zone: &Tz) -> Result<i32> {
    let local = unix_timestamp_to_local_timestamp(millis, zone)?;
    Ok(date_to_unix_date(local.date()))
}

pub fn date_to_unix_date_optional(date: Option<NaiveDate>) -> Option<i32> {
    date.map(date_to_unix_date)
}

pub fn time_to_unix_time_optional(time: Option<NaiveTime>) -> Option<i32> {
    time.map(time_to_unix_time)
}

pub fn timestamp_to_unix_timestamp_optional(ts: Option<NaiveDateTime>) -> Option<i64> {
    ts.map(timestamp_to_unix_timestamp)
}

pub fn date_with_zone_to_unix_date_optional<Tz: TimeZone>(
    date: Option<NaiveDate>,
    zone: &Tz,
) -> Result<Option<i32>> {
    date.map(|d| date_with_zone_to_unix_date(d, zone)).transpose()
}

pub fn timestamp_with_zone_to_unix_timestamp_optional<Tz: TimeZone>(
    ts: Option<NaiveDateTime>,
    zone: &Tz,
) -> Result<Option<i64>> {
    ts.map(|t| timestamp_with_zone_to_unix_timestamp(t, zone))
        .transpose()
}

/// Parses `YYYY-MM-DD` to a Unix day.
pub fn date_string_to_unix_date(s: &str) -> Result<i32> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::invalid_query(format!("Invalid date '{}': {}", s, e)))?;
    Ok(date_to_unix_date(date))
}

/// Parses `HH:MM:SS` with optional fractional seconds to Unix time.
pub fn time_string_to_unix_time(s: &str) -> Result<i32> {
    let s = s.trim();
    let time = NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| Error::invalid_query(format!("Invalid time '{}': {}", s, e)))?;
    Ok(time_to_unix_time(time))
}

/// Parses `YYYY-MM-DD HH:MM:SS` with optional fractional seconds to a
/// Unix timestamp.
pub fn timestamp_string_to_unix_timestamp(s: &str) -> Result<i64> {
    let s = s.trim();
    let ts = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| Error::invalid_query(format!("Invalid timestamp '{}': {}", s, e)))?;
    Ok(timestamp_to_unix_timestamp(ts))
}

pub fn unix_date_to_string(days: i32) -> Result<String> {
    Ok(unix_date_to_date(days)?.format("%Y-%m-%d").to_string())
}

pub fn unix_time_to_string(millis: i32) -> Result<String> {
    let time = unix_time_to_time(millis)?;
    let base = time.format("%H:%M:%S").to_string();
    let ms = millis % 1_000;
    if ms == 0 {
        Ok(base)
    } else {
        Ok(format!("{}.{:03}", base, ms))
    }
}

pub fn unix_timestamp_to_string(millis: i64) -> Result<String> {
    let ts = unix_timestamp_to_timestamp(millis)?;
    let base = ts.format("%Y-%m-%d %H:%M:%S").to_string();
    let ms = millis.rem_euclid(MILLIS_PER_SECOND);
    if ms == 0 {
        Ok(base)
    } else {
        Ok(format!("{}.{:03}", base, ms))
    }
}

/// DATE operand to its Unix day count.
pub fn eval_unix_date(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Date(d) => Ok(Value::int64(date_to_unix_date(*d) as i64)),
        _ => Err(Error::type_mismatch_value("DATE", value)),
    }
}

/// Unix day count to a DATE operand.
pub fn eval_date_from_unix_date(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        _ => match value.as_i64() {
            Some(days) => {
                let days = i32::try_from(days).map_err(|_| {
                    Error::invalid_query(format!("Unix date out of range: {}", days))
                })?;
                Ok(Value::date(unix_date_to_date(days)?))
            }
            None => Err(Error::type_mismatch_value("INT64", value)),
        },
    }
}

/// TIMESTAMP operand to its Unix millisecond count.
pub fn eval_unix_millis(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Timestamp(ts) => Ok(Value::int64(ts.timestamp_millis())),
        _ => Err(Error::type_mismatch_value("TIMESTAMP", value)),
    }
}

/// Unix millisecond count to a TIMESTAMP operand.
pub fn eval_timestamp_millis(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        _ => match value.as_i64() {
            Some(millis) => DateTime::from_timestamp_millis(millis)
                .map(Value::timestamp)
                .ok_or_else(|| {
                    Error::invalid_query(format!("Unix timestamp out of range: {}", millis))
                }),
            None => Err(Error::type_mismatch_value("INT64", value)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(date_string_to_unix_date("1970-01-01").unwrap(), 0);
        assert_eq!(
            timestamp_string_to_unix_timestamp("1970-01-01 00:00:00").unwrap(),
            0
        );
        assert_eq!(time_string_to_unix_time("00:00:00").unwrap(), 0);
        assert_eq!(
            time_string_to_unix_time("23:59:59").unwrap(),
            (MILLIS_PER_DAY - MILLIS_PER_SECOND) as i32
        );
    }

    #[test]
    fn test_gregorian_shift_days_are_distinct() {
        let d04 = date_string_to_unix_date("1582-10-04").unwrap();
        let d05 = date_string_to_unix_date("1582-10-05").unwrap();
        let d15 = date_string_to_unix_date("1582-10-15").unwrap();
        assert_eq!(d05, d04 + 1);
        assert_eq!(d15, d05 + 10);
    }

    #[test]
    fn test_round_trip_sampled_days() {
        for days in [-719162, -141427, -141418, -1, 0, 1, 16_343, 2_932_896] {
            let date = unix_date_to_date(days).unwrap();
            assert_eq!(date_to_unix_date(date), days);
        }
    }

    #[test]
    fn test_timestamp_fraction_round_trip() {
        let millis = timestamp_string_to_unix_timestamp("2014-09-30 15:28:27.356").unwrap();
        assert_eq!(
            unix_timestamp_to_string(millis).unwrap(),
            "2014-09-30 15:28:27.356"
        );
    }
}
