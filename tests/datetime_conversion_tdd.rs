use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use skiffsql::datetime::{
    date_string_to_unix_date, date_to_unix_date, date_to_unix_date_optional,
    date_with_zone_to_unix_date, eval_date_from_unix_date, eval_timestamp_millis, eval_unix_date,
    eval_unix_millis, time_string_to_unix_time, time_to_unix_time, time_to_unix_time_optional,
    timestamp_string_to_unix_timestamp, timestamp_to_unix_timestamp,
    timestamp_to_unix_timestamp_optional, timestamp_with_zone_to_unix_timestamp,
    timestamp_with_zone_to_unix_timestamp_optional, unix_date_at_zone, unix_date_to_date,
    unix_date_to_string, unix_time_to_time, unix_timestamp_to_local_timestamp,
    unix_timestamp_to_string, unix_timestamp_to_timestamp, MILLIS_PER_DAY, MILLIS_PER_HOUR,
};
use skiffsql::Value;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .unwrap()
}

#[test]
fn test_epoch_date() {
    assert_eq!(date_to_unix_date(date(1970, 1, 1)), 0);
    assert_eq!(date_string_to_unix_date("1970-01-01").unwrap(), 0);
    assert_eq!(unix_date_to_date(0).unwrap(), date(1970, 1, 1));
}

#[test]
fn test_gregorian_shift_uses_proleptic_rules() {
    // 1582-10-05 .. 1582-10-14 never existed in the historical
    // calendar; the proleptic Gregorian reckoning gives them real,
    // distinct day numbers anyway.
    let d04 = date_string_to_unix_date("1582-10-04").unwrap();
    let d05 = date_string_to_unix_date("1582-10-05").unwrap();
    let d15 = date_string_to_unix_date("1582-10-15").unwrap();
    assert_eq!(d05, d04 + 1);
    assert_eq!(d15, d05 + 10);
    assert_eq!(d15, -141_427);

    assert_eq!(unix_date_to_string(d05).unwrap(), "1582-10-05");
    assert_eq!(unix_date_to_string(d15).unwrap(), "1582-10-15");
}

#[test]
fn test_ansi_date_range_round_trip() {
    // January 1st of every year in the ANSI SQL range
    for year in 1..=9999 {
        let civil = date(year, 1, 1);
        let days = date_to_unix_date(civil);
        assert_eq!(
            unix_date_to_date(days).unwrap(),
            civil,
            "round trip failed for year {}",
            year
        );
    }
    assert_eq!(date_to_unix_date(date(1, 1, 1)), -719_162);
    assert_eq!(date_to_unix_date(date(9999, 12, 31)), 2_932_896);
}

#[test]
fn test_leap_year_rules() {
    // divisible by 4
    assert_eq!(
        date_to_unix_date(date(2004, 3, 1)) - date_to_unix_date(date(2004, 2, 1)),
        29
    );
    // centuries are not leap years
    assert_eq!(
        date_to_unix_date(date(1900, 3, 1)) - date_to_unix_date(date(1900, 2, 1)),
        28
    );
    // unless divisible by 400
    assert_eq!(
        date_to_unix_date(date(2000, 3, 1)) - date_to_unix_date(date(2000, 2, 1)),
        29
    );
}

#[test]
fn test_time_conversions() {
    assert_eq!(time_string_to_unix_time("00:00:00").unwrap(), 0);
    assert_eq!(
        time_string_to_unix_time("23:59:59").unwrap(),
        (MILLIS_PER_DAY - 1_000) as i32
    );
    assert_eq!(
        time_to_unix_time(NaiveTime::from_hms_milli_opt(15, 28, 27, 356).unwrap()),
        15 * 3_600_000 + 28 * 60_000 + 27_000 + 356
    );
    assert_eq!(
        unix_time_to_time(0).unwrap(),
        NaiveTime::from_hms_opt(0, 0, 0).unwrap()
    );
    assert_eq!(
        unix_time_to_time(86_399_000).unwrap(),
        NaiveTime::from_hms_opt(23, 59, 59).unwrap()
    );
    assert!(unix_time_to_time(-1).is_err());
    assert!(unix_time_to_time(MILLIS_PER_DAY as i32).is_err());
}

#[test]
fn test_timestamp_conversions() {
    assert_eq!(
        timestamp_to_unix_timestamp(timestamp("1970-01-01 00:00:00")),
        0
    );
    let millis = timestamp_string_to_unix_timestamp("2014-09-30 15:28:27.356").unwrap();
    assert_eq!(
        unix_timestamp_to_timestamp(millis).unwrap(),
        timestamp("2014-09-30 15:28:27.356")
    );
    assert_eq!(
        unix_timestamp_to_string(millis).unwrap(),
        "2014-09-30 15:28:27.356"
    );

    let millis = timestamp_string_to_unix_timestamp("1500-04-30 12:00:00.123").unwrap();
    assert_eq!(
        unix_timestamp_to_string(millis).unwrap(),
        "1500-04-30 12:00:00.123"
    );
}

#[test]
fn test_timestamp_gregorian_shift() {
    let t04 = timestamp_string_to_unix_timestamp("1582-10-04 00:00:00").unwrap();
    let t05 = timestamp_string_to_unix_timestamp("1582-10-05 00:00:00").unwrap();
    let t15 = timestamp_string_to_unix_timestamp("1582-10-15 00:00:00").unwrap();
    assert_eq!(t05, t04 + MILLIS_PER_DAY);
    assert_eq!(t15, t05 + 10 * MILLIS_PER_DAY);
}

#[test]
fn test_ansi_timestamp_range_round_trip() {
    for year in (1..=9999).step_by(7) {
        let civil = timestamp(&format!("{:04}-01-01 00:00:00", year));
        let millis = timestamp_to_unix_timestamp(civil);
        assert_eq!(unix_timestamp_to_timestamp(millis).unwrap(), civil);
        assert_eq!(millis % MILLIS_PER_DAY, 0);
    }
}

#[test]
fn test_zone_aware_conversion_subtracts_offset() {
    let wall = timestamp("1970-01-01 00:00:00");

    let utc = FixedOffset::east_opt(0).unwrap();
    assert_eq!(
        timestamp_with_zone_to_unix_timestamp(wall, &utc).unwrap(),
        0
    );

    // midnight in GMT-5 is five hours after midnight UTC
    let est = FixedOffset::west_opt(5 * 3600).unwrap();
    assert_eq!(
        timestamp_with_zone_to_unix_timestamp(wall, &est).unwrap(),
        5 * MILLIS_PER_HOUR
    );

    let ist = FixedOffset::east_opt(5 * 3600).unwrap();
    assert_eq!(
        timestamp_with_zone_to_unix_timestamp(wall, &ist).unwrap(),
        -5 * MILLIS_PER_HOUR
    );

    // Utc implements the same capability
    assert_eq!(timestamp_with_zone_to_unix_timestamp(wall, &Utc).unwrap(), 0);
}

#[test]
fn test_zone_aware_date_conversion() {
    let epoch_date = date(1970, 1, 1);
    let utc = FixedOffset::east_opt(0).unwrap();
    assert_eq!(date_with_zone_to_unix_date(epoch_date, &utc).unwrap(), 0);

    // local midnight east of Greenwich falls on the previous UTC day
    let ist = FixedOffset::east_opt(5 * 3600).unwrap();
    assert_eq!(date_with_zone_to_unix_date(epoch_date, &ist).unwrap(), -1);

    let est = FixedOffset::west_opt(5 * 3600).unwrap();
    assert_eq!(date_with_zone_to_unix_date(epoch_date, &est).unwrap(), 0);
}

#[test]
fn test_local_view_of_instant() {
    let est = FixedOffset::west_opt(5 * 3600).unwrap();
    assert_eq!(
        unix_timestamp_to_local_timestamp(0, &est).unwrap(),
        timestamp("1969-12-31 19:00:00")
    );
    assert_eq!(unix_date_at_zone(0, &est).unwrap(), -1);

    let ist = FixedOffset::east_opt(5 * 3600).unwrap();
    assert_eq!(
        unix_timestamp_to_local_timestamp(0, &ist).unwrap(),
        timestamp("1970-01-01 05:00:00")
    );
    assert_eq!(unix_date_at_zone(0, &ist).unwrap(), 0);
}

#[test]
fn test_zone_round_trip() {
    let est = FixedOffset::west_opt(5 * 3600).unwrap();
    let wall = timestamp("2014-09-30 15:28:27.356");
    let millis = timestamp_with_zone_to_unix_timestamp(wall, &est).unwrap();
    assert_eq!(unix_timestamp_to_local_timestamp(millis, &est).unwrap(), wall);
}

#[test]
fn test_optional_variants() {
    assert_eq!(date_to_unix_date_optional(Some(date(1970, 1, 1))), Some(0));
    assert_eq!(date_to_unix_date_optional(None), None);

    assert_eq!(
        time_to_unix_time_optional(Some(NaiveTime::from_hms_opt(0, 0, 0).unwrap())),
        Some(0)
    );
    assert_eq!(time_to_unix_time_optional(None), None);

    assert_eq!(
        timestamp_to_unix_timestamp_optional(Some(timestamp("1970-01-01 00:00:00"))),
        Some(0)
    );
    assert_eq!(timestamp_to_unix_timestamp_optional(None), None);

    let utc = FixedOffset::east_opt(0).unwrap();
    assert_eq!(
        timestamp_with_zone_to_unix_timestamp_optional(
            Some(timestamp("1970-01-01 00:00:00")),
            &utc
        )
        .unwrap(),
        Some(0)
    );
    assert_eq!(
        timestamp_with_zone_to_unix_timestamp_optional(None, &utc).unwrap(),
        None
    );
}

#[test]
fn test_value_level_conversions() {
    let civil = Value::date(date(1500, 4, 30));
    let days = eval_unix_date(&civil).unwrap();
    assert_eq!(eval_date_from_unix_date(&days).unwrap(), civil);
    assert!(eval_unix_date(&Value::Null).unwrap().is_null());
    assert!(eval_unix_date(&Value::string("1500-04-30")).is_err());

    let instant = Value::timestamp(
        chrono::DateTime::from_timestamp_millis(1_412_090_907_356).unwrap(),
    );
    let millis = eval_unix_millis(&instant).unwrap();
    assert_eq!(millis, Value::int64(1_412_090_907_356));
    assert_eq!(eval_timestamp_millis(&millis).unwrap(), instant);
    assert!(eval_timestamp_millis(&Value::Null).unwrap().is_null());
}
