use super::*;
use time::Month;

#[test]
fn parse_date_accepts_plain_date() {
    let date = parse_date("2026-03-09").expect("date");
    assert_eq!((date.year(), date.month(), date.day()), (2026, Month::March, 9));
}

#[test]
fn parse_date_accepts_timestamp_prefix() {
    let date = parse_date("2026-03-09T14:30:00Z").expect("date");
    assert_eq!(date.day(), 9);
}

#[test]
fn parse_date_rejects_garbage() {
    assert!(parse_date("soon").is_none());
    assert!(parse_date("2026-13-01").is_none());
    assert!(parse_date("").is_none());
}

#[test]
fn parse_timestamp_requires_rfc3339() {
    assert!(parse_timestamp("2026-03-09T14:30:00+01:00").is_some());
    assert!(parse_timestamp("2026-03-09").is_none());
}

#[test]
fn format_round_trips_display_forms() {
    let date = parse_date("2026-01-05").expect("date");
    assert_eq!(format_date(date), "2026-01-05");
    assert_eq!(format_date_de(date), "05.01.2026");
}
