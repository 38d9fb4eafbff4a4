use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Describes the time between `start` and `end` using the coarsest readable unit:
/// `"<d> days"` from 24 hours on, `"<m> minutes"` under an hour, `"<h> hours <m> minutes"`
/// otherwise. Seconds are always dropped.
///
/// Spans where `end` precedes `start` produce some string but carry no meaning.
pub fn calculate_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let difference = (end - start).num_milliseconds();
    let hours = difference.div_euclid(HOUR_MS);
    let days = difference.div_euclid(DAY_MS);
    let minutes = difference.rem_euclid(HOUR_MS) / MINUTE_MS;

    if hours > 23 {
        format!("{days} days")
    } else if hours < 1 {
        format!("{minutes} minutes")
    } else {
        format!("{hours} hours {minutes} minutes")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    use super::*;

    // Monday 09:00
    const TEST_START_DATE: NaiveDateTime = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    );

    fn after(duration: Duration) -> String {
        let start = Utc.from_utc_datetime(&TEST_START_DATE);
        calculate_duration(start, start + duration)
    }

    #[test]
    fn test_under_an_hour_is_minutes() {
        assert_eq!(after(Duration::minutes(45)), "45 minutes");
        assert_eq!(after(Duration::seconds(59 * 60 + 59)), "59 minutes");
        assert_eq!(after(Duration::seconds(30)), "0 minutes");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(after(Duration::minutes(150)), "2 hours 30 minutes");
        assert_eq!(after(Duration::hours(1)), "1 hours 0 minutes");
    }

    #[test]
    fn test_just_under_a_day_stays_in_hours() {
        assert_eq!(
            after(Duration::hours(24) - Duration::seconds(1)),
            "23 hours 59 minutes"
        );
    }

    #[test]
    fn test_full_days() {
        assert_eq!(after(Duration::hours(24)), "1 days");
        assert_eq!(after(Duration::hours(71)), "2 days");
        assert_eq!(after(Duration::days(10) + Duration::hours(5)), "10 days");
    }

    #[test]
    fn test_degenerate_spans_do_not_panic() {
        assert_eq!(after(Duration::zero()), "0 minutes");
        let _ = after(-Duration::minutes(90));
        let _ = after(-Duration::days(3));
    }
}
