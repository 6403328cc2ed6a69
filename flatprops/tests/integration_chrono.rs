//! Integration tests for chrono date and time fields.
//!
//! Dates render as leaves: `DateTime` in RFC 3339, naive types through their
//! `Display` impl. The Unix epoch (each type's `Default`) is the zero value.

#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use flatprops::{flatten, DateOfBirth, Describe, FlattenOptions, REDACTION_MARKER};

#[derive(Describe, Default)]
#[describe(rename_all = "PascalCase")]
struct Booking {
    created_at: DateTime<Utc>,
    local_time: DateTime<FixedOffset>,
    day: NaiveDate,
    slot: NaiveTime,
    stamped: NaiveDateTime,
    #[sensitive(DateOfBirth)]
    birth_date: NaiveDate,
}

fn booking() -> Booking {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    Booking {
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        local_time: offset.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap(),
        day,
        slot: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
        stamped: day.and_hms_opt(8, 0, 0).unwrap(),
        birth_date: NaiveDate::from_ymd_opt(1990, 7, 14).unwrap(),
    }
}

#[test]
fn test_set_dates_render_as_leaves() {
    let flat = flatten(&booking(), &FlattenOptions::default());

    assert_eq!(flat["CreatedAt"], "2024-03-01T12:30:00Z");
    assert_eq!(flat["LocalTime"], "2024-03-01T14:30:00+02:00");
    assert_eq!(flat["Day"], "2024-03-01");
    assert_eq!(flat["Slot"], "09:05:00");
    assert_eq!(flat["Stamped"], "2024-03-01 08:00:00");
    assert_eq!(flat["BirthDate"], "1990-07-14");
    assert_eq!(flat.len(), 6);
}

#[test]
fn test_default_dates_are_zero_values() {
    let flat = flatten(&Booking::default(), &FlattenOptions::default());

    assert_eq!(flat.len(), 6);
    for (key, value) in &flat {
        assert_eq!(value, "", "{key} should be empty");
    }
}

#[test]
fn test_epoch_in_another_offset_is_still_the_zero_value() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let epoch: DateTime<FixedOffset> = DateTime::<Utc>::default().with_timezone(&offset);

    let flat = flatten(&epoch, &FlattenOptions::new().with_key_prefix("At"));
    assert_eq!(flat["At"], "1969-12-31T19:00:00-05:00");

    #[derive(Describe)]
    struct Wrapper {
        at: DateTime<FixedOffset>,
    }
    let flat = flatten(&Wrapper { at: epoch }, &FlattenOptions::default());
    assert_eq!(flat["at"], "");
}

#[test]
fn test_sensitive_date_is_masked() {
    let flat = flatten(&booking(), &FlattenOptions::new().with_redaction(true));
    assert_eq!(flat["BirthDate"], REDACTION_MARKER);
    assert_eq!(flat["Day"], "2024-03-01");
}
