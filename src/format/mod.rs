//! Conversion of instants into the labels shown next to activities.
//! Everything here is pure: the `_in` variants take the time zone explicitly, the plain
//! variants use the local zone of the process.

pub mod duration;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

pub const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats time of day as `HH:MM am|pm`. Hours are not wrapped to a 12 hour clock, so midnight
/// is `00:05 am` and one in the afternoon is `13:00 pm`.
pub fn format_time_in<Tz: TimeZone>(instant: DateTime<Utc>, zone: &Tz) -> String {
    let local = instant.with_timezone(zone);
    let hours = local.hour();
    let minutes = local.minute();
    format!(
        "{hours:02}:{minutes:02} {}",
        if hours >= 12 { "pm" } else { "am" }
    )
}

pub fn format_time(instant: DateTime<Utc>) -> String {
    format_time_in(instant, &Local)
}

/// Formats a date as `" <Weekday> <Day> <Month>"`. The leading space is part of the label.
pub fn format_date_in<Tz: TimeZone>(instant: DateTime<Utc>, zone: &Tz) -> String {
    let local = instant.with_timezone(zone);
    format!(
        " {} {} {}",
        DAYS[local.weekday().num_days_from_sunday() as usize],
        local.day(),
        MONTHS[local.month0() as usize]
    )
}

pub fn format_date(instant: DateTime<Utc>) -> String {
    format_date_in(instant, &Local)
}
