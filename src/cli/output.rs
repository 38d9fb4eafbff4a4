//! Terminal rendering of the two activity views.

use std::io::{self, Write};

use ansi_term::{Colour, Style};
use chrono::{DateTime, TimeZone, Utc};

use crate::{
    activity::Activity,
    format::{duration::calculate_duration, format_date_in, format_time_in},
};

/// Styles used for printing. [Palette::plain] produces no escape codes at all.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    heading: Style,
    title: Style,
    muted: Style,
    progress: Style,
}

impl Palette {
    pub fn new(colored: bool) -> Self {
        if colored {
            Self {
                heading: Style::new().bold(),
                title: Colour::Cyan.bold(),
                muted: Style::new().dimmed(),
                progress: Colour::Yellow.normal(),
            }
        } else {
            Self::plain()
        }
    }

    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            title: Style::new(),
            muted: Style::new(),
            progress: Style::new(),
        }
    }
}

pub fn write_today<W: Write, Tz: TimeZone>(
    out: &mut W,
    zone: &Tz,
    now: DateTime<Utc>,
    palette: Palette,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        palette.muted.paint(format!("Today:{}", format_date_in(now, zone)))
    )
}

/// Prints the header followed by the `Recent` (active) and `History` (completed) sections.
pub fn write_overview<W: Write, Tz: TimeZone>(
    out: &mut W,
    zone: &Tz,
    now: DateTime<Utc>,
    active: &[Activity],
    completed: &[Activity],
    palette: Palette,
) -> io::Result<()> {
    writeln!(out, "{}", palette.heading.paint("Productivity Tracker"))?;
    write_today(out, zone, now, palette)?;
    writeln!(out)?;

    writeln!(out, "{}", palette.heading.paint("Recent"))?;
    if active.is_empty() {
        writeln!(out, "  {}", palette.muted.paint("Nothing in progress"))?;
    }
    for activity in active {
        write_card_header(out, zone, activity, palette)?;
        writeln!(
            out,
            "  Started: {}\t{}",
            format_time_in(activity.start_date, zone),
            palette.progress.paint("In progress...")
        )?;
        writeln!(out, "  {}", palette.muted.paint(format!("id: {}", activity.id)))?;
        writeln!(out)?;
    }

    writeln!(out, "{}", palette.heading.paint("History"))?;
    if completed.is_empty() {
        writeln!(out, "  {}", palette.muted.paint("No finished activities"))?;
    }
    for activity in completed {
        write_card_header(out, zone, activity, palette)?;
        // Everything in the completed view has an end date.
        if let Some(end_date) = activity.end_date {
            writeln!(
                out,
                "  Duration: {}",
                calculate_duration(activity.start_date, end_date)
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_card_header<W: Write, Tz: TimeZone>(
    out: &mut W,
    zone: &Tz,
    activity: &Activity,
    palette: Palette,
) -> io::Result<()> {
    writeln!(
        out,
        "  {}\t{}",
        palette.title.paint(&*activity.title),
        palette.muted.paint(format_date_in(activity.start_date, zone))
    )?;
    if !activity.description.is_empty() {
        writeln!(out, "  {}", activity.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

    use super::*;

    const TEST_START_DATE: NaiveDateTime = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    );

    fn start() -> DateTime<Utc> {
        Utc.from_utc_datetime(&TEST_START_DATE)
    }

    fn render(active: &[Activity], completed: &[Activity]) -> Result<String> {
        let mut out = vec![];
        write_overview(
            &mut out,
            &Utc,
            start() + Duration::hours(5),
            active,
            completed,
            Palette::plain(),
        )?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_overview_layout() -> Result<()> {
        let active = [Activity {
            id: "65a1".into(),
            title: "Reading".into(),
            description: "Chapter 3".into(),
            start_date: start(),
            end_date: None,
        }];
        let completed = [Activity {
            id: "65a0".into(),
            title: "Gym".into(),
            description: "".into(),
            start_date: start() - Duration::days(1),
            end_date: Some(start() - Duration::days(1) + Duration::minutes(75)),
        }];

        let output = render(&active, &completed)?;

        let expected = "Productivity Tracker\n\
            Today: Sunday 7 January\n\
            \n\
            Recent\n  \
              Reading\t Sunday 7 January\n  \
              Chapter 3\n  \
              Started: 09:00 am\tIn progress...\n  \
              id: 65a1\n\
            \n\
            History\n  \
              Gym\t Saturday 6 January\n  \
              Duration: 1 hours 15 minutes\n\
            \n";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_overview_empty_sections() -> Result<()> {
        let output = render(&[], &[])?;

        assert!(output.contains("Recent\n  Nothing in progress\n"));
        assert!(output.contains("History\n  No finished activities\n"));
        Ok(())
    }

    #[test]
    fn test_colored_output_contains_escape_codes() -> Result<()> {
        let mut out = vec![];
        write_today(&mut out, &Utc, start(), Palette::new(true))?;
        let output = String::from_utf8(out)?;

        assert!(output.contains("\x1b["));
        assert!(output.contains("Today: Sunday 7 January"));
        Ok(())
    }
}
