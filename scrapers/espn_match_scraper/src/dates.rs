//! Site dates carry no year ("Sat, Nov 15"), so the caller supplies one.

use chrono::{Datelike, Duration, Month, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ExtractError, ExtractResult};

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{3}),\s*([A-Za-z]{3})\s+(\d{1,2})$").unwrap());
static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").unwrap());

pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// True when `text` is a kickoff time such as `18:00` or `9:30`.
pub fn is_clock_time(text: &str) -> bool {
    CLOCK_RE.is_match(text.trim())
}

fn parse_clock(text: &str) -> Option<NaiveTime> {
    let caps = CLOCK_RE.captures(text.trim())?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Split a site date into (month, day). The weekday must be a real weekday
/// name but is not checked against the resulting date.
fn parse_month_day(date_text: &str) -> ExtractResult<(u32, u32)> {
    let trimmed = date_text.trim();
    let caps = DATE_RE
        .captures(trimmed)
        .ok_or_else(|| ExtractError::format("date", date_text))?;

    caps[1]
        .parse::<Weekday>()
        .map_err(|_| ExtractError::format("date", date_text))?;
    let month = caps[2]
        .parse::<Month>()
        .map_err(|_| ExtractError::format("date", date_text))?;
    let day = caps[3]
        .parse::<u32>()
        .map_err(|_| ExtractError::format("date", date_text))?;

    Ok((month.number_from_month(), day))
}

/// Convert `"Sat, Nov 15"` plus an optional `"18:00"` into
/// `"2025-11-15T18:00:00Z"`.
///
/// A malformed date is a format error. A malformed time is ignored and the
/// result falls back to midnight. The clock time is copied verbatim; the `Z`
/// suffix does not mean the site time was actually UTC.
pub fn normalize(date_text: &str, time_text: Option<&str>, reference_year: i32) -> ExtractResult<String> {
    let (month, day) = parse_month_day(date_text)?;
    let date = NaiveDate::from_ymd_opt(reference_year, month, day)
        .ok_or_else(|| ExtractError::format("date", date_text))?;

    let time = time_text.and_then(parse_clock).unwrap_or_default();

    Ok(NaiveDateTime::new(date, time).format(ISO_FORMAT).to_string())
}

/// Fixtures dated up to this many days before today still count as upcoming.
pub const FIXTURE_SLACK_DAYS: i64 = 7;

/// Whether a yearless date is known to be behind or ahead of today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDirection {
    /// Completed matches: the latest year that keeps the date on or before today.
    Past,
    /// Fixtures: the earliest year that keeps the date on or after today,
    /// less [`FIXTURE_SLACK_DAYS`].
    Upcoming,
}

/// Pick the year for `date_text` among `today`'s previous, current and next
/// year. A December fixture read in January lands in the new year and a July
/// result read in January stays in the old one.
pub fn infer_year(date_text: &str, today: NaiveDate, direction: DateDirection) -> ExtractResult<i32> {
    let (month, day) = parse_month_day(date_text)?;
    let year = today.year();

    let candidates = [year - 1, year, year + 1]
        .into_iter()
        .filter_map(|candidate| NaiveDate::from_ymd_opt(candidate, month, day).map(|d| (candidate, d)));

    let chosen = match direction {
        DateDirection::Past => candidates.filter(|(_, d)| *d <= today).max_by_key(|(_, d)| *d),
        DateDirection::Upcoming => {
            let earliest = today - Duration::days(FIXTURE_SLACK_DAYS);
            candidates.filter(|(_, d)| *d >= earliest).min_by_key(|(_, d)| *d)
        }
    };

    chosen
        .map(|(candidate, _)| candidate)
        .ok_or_else(|| ExtractError::format("date", date_text))
}
