//! Year progress calculation.

use crate::error::ProgressError;
use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};

/// Moment to compute progress for, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    /// A wall-clock time in the local time zone.
    Local(DateTime<Local>),
    /// A timestamp that carried its own UTC offset.
    Fixed(DateTime<FixedOffset>),
}

impl Moment {
    pub fn now() -> Self {
        Moment::Local(Local::now())
    }

    pub fn year_progress(&self) -> Result<f64, ProgressError> {
        match self {
            Moment::Local(t) => calculate_year_progress(t),
            Moment::Fixed(t) => calculate_year_progress(t),
        }
    }
}

/// Percentage of the calendar year containing `t` that has elapsed at `t`.
///
/// Year boundaries are taken at local midnight on January 1st in `t`'s own
/// time zone. The result is not clamped.
///
/// # Errors
/// [`ProgressError::YearOutOfRange`] if the start of the year or of the next
/// year cannot be represented.
pub fn calculate_year_progress<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<f64, ProgressError> {
    let tz = t.timezone();
    let year_start = start_of_year(&tz, t.year())?;
    let next_year_start = start_of_year(&tz, t.year() + 1)?;

    let elapsed = t.clone().signed_duration_since(year_start.clone());
    let total = next_year_start.signed_duration_since(year_start);

    Ok(elapsed.num_milliseconds() as f64 / total.num_milliseconds() as f64 * 100.0)
}

fn start_of_year<Tz: TimeZone>(tz: &Tz, year: i32) -> Result<DateTime<Tz>, ProgressError> {
    let midnight = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or(ProgressError::YearOutOfRange(year))?
        .and_time(NaiveTime::MIN);

    Ok(resolve_wall_clock(tz, &midnight))
}

/// Places a wall-clock time in `tz`.
///
/// Ambiguous times take the earlier instant. Times skipped by a DST gap are
/// read as UTC, which lands within the gap's width of the intended moment.
pub fn resolve_wall_clock<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    tz.from_local_datetime(naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(naive))
}

/// Parses a `--date` argument.
///
/// Accepts RFC 3339 timestamps, naive date-times (`T` or space separated) and
/// bare dates. Naive values are read as local wall-clock time.
pub fn parse_moment(value: &str) -> Result<Moment, ProgressError> {
    let value = value.trim();

    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Ok(Moment::Fixed(t));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| ProgressError::InvalidTimestamp(value.to_string()))?;

    Ok(Moment::Local(resolve_wall_clock(&Local, &naive)))
}
