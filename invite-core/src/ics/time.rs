//! UTC stamps and alarm trigger durations.
//!
//! Everything here is plain arithmetic on integer seconds. The only clock
//! read is `local_offset_seconds`, which asks the host for its current UTC
//! offset.

use std::time::Duration;

use chrono::{DateTime, Local, Utc};

/// `YYYYMMDDTHHMMSSZ`
pub const UTC_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Current local UTC offset of the host, in seconds east of UTC.
#[must_use]
pub fn local_offset_seconds() -> i32 {
    Local::now().offset().local_minus_utc()
}

/// Formats `instant` (Unix seconds) as a UTC stamp, reading it as local
/// wall time under `offset_seconds` and then shifting by the offset's
/// absolute value: `instant + offset + |offset|`.
///
/// West of UTC the two terms cancel and the result is the true UTC time;
/// east of UTC the wall time moves forward by `|offset|` again.
/// Returns `None` when the shifted instant is out of range.
#[must_use]
pub fn format_utc(instant: i64, offset_seconds: i32) -> Option<String> {
    let offset = i64::from(offset_seconds);
    let shifted = instant
        .checked_add(offset)?
        .checked_add(offset.abs())?;
    let dt = DateTime::<Utc>::from_timestamp(shifted, 0)?;
    Some(dt.format(UTC_STAMP_FORMAT).to_string())
}

/// [`format_utc`] using the host's current offset.
#[must_use]
pub fn to_utc_stamp(instant: i64) -> Option<String> {
    format_utc(instant, local_offset_seconds())
}

/// Formats a UTC datetime without any offset shift.
#[must_use]
pub fn format_stamp(dt: &DateTime<Utc>) -> String {
    dt.format(UTC_STAMP_FORMAT).to_string()
}

/// Formats an alarm lead time as the body of a `TRIGGER:-P...` duration.
///
/// Decomposes greedily into days, hours, minutes and seconds (any sub-second
/// remainder rounds the seconds up). Zero components are always written.
#[must_use]
pub fn trigger_duration(lead: Duration) -> String {
    let mut remaining = lead.as_secs();

    let days = remaining / SECONDS_PER_DAY;
    remaining -= days * SECONDS_PER_DAY;

    let hours = remaining / SECONDS_PER_HOUR;
    remaining -= hours * SECONDS_PER_HOUR;

    let minutes = remaining / SECONDS_PER_MINUTE;
    remaining -= minutes * SECONDS_PER_MINUTE;

    let seconds = if lead.subsec_nanos() > 0 {
        remaining + 1
    } else {
        remaining
    };

    format!("{days}DT{hours}H{minutes}M{seconds}S")
}
