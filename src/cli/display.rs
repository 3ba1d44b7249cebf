// src/cli/display.rs

use chrono::{DateTime, Utc};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::domain::bookmark::Bookmark;

/// Writes the populated trash listing to stdout, server order preserved.
pub fn write_trash_listing(bookmarks: &[Bookmark]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    writeln!(
        stdout,
        "{} bookmarks in the trash (deleted bookmarks are removed for good after 30 days)",
        bookmarks.len()
    )?;
    writeln!(stdout)?;

    let now = Utc::now();
    for bookmark in bookmarks {
        write_bookmark_row(&mut stdout, bookmark, now)?;
    }
    stdout.reset()?;
    Ok(())
}

fn write_bookmark_row(
    stdout: &mut StandardStream,
    bookmark: &Bookmark,
    now: DateTime<Utc>,
) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    write!(stdout, "{}", bookmark.title)?;
    stdout.reset()?;
    writeln!(stdout, "  [{}]", bookmark.id)?;

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(stdout, "  {}", bookmark.url)?;
    stdout.reset()?;

    let deleted = match bookmark.deleted_at {
        Some(ts) => format_relative(ts, now),
        None => "unknown".to_string(),
    };
    stdout.set_color(ColorSpec::new().set_dimmed(true))?;
    writeln!(stdout, "  deleted {}", deleted)?;
    stdout.reset()?;
    writeln!(stdout)?;
    Ok(())
}

/// Coarse relative timestamp, newest unit only.
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(ts);
    if delta.num_seconds() < 0 {
        return "just now".to_string();
    }

    let minutes = delta.num_minutes();
    let hours = delta.num_hours();
    let days = delta.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn given_recent_timestamp_when_format_relative_then_just_now() {
        let now = Utc::now();
        assert_eq!(format_relative(now, now), "just now");
        assert_eq!(format_relative(now - Duration::seconds(30), now), "just now");
    }

    #[test]
    fn given_past_timestamps_when_format_relative_then_single_coarse_unit() {
        let now = Utc::now();
        assert_eq!(
            format_relative(now - Duration::minutes(5), now),
            "5 minutes ago"
        );
        assert_eq!(format_relative(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_relative(now - Duration::days(3), now), "3 days ago");
        assert_eq!(
            format_relative(now - Duration::days(90), now),
            "3 months ago"
        );
        assert_eq!(
            format_relative(now - Duration::days(800), now),
            "2 years ago"
        );
    }

    #[test]
    fn given_future_timestamp_when_format_relative_then_just_now() {
        let now = Utc::now();
        assert_eq!(format_relative(now + Duration::minutes(5), now), "just now");
    }
}
