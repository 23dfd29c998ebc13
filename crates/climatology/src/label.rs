//! Date labels for assembled climatologies.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use helios_calendar::{Frequency, days_in_month};

use crate::error::ClimatologyError;
use crate::partition::BucketKey;

/// A label on one climatology bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClimatLabel {
    /// A real calendar date in the representative year.
    Date(NaiveDateTime),
    /// A synthetic ordinal: hour-of-year (from 0), day-of-year or
    /// month-of-year (from 1).
    Ordinal(u32),
    /// A season acronym built from month letters, e.g. "DJF".
    Season(String),
}

impl fmt::Display for ClimatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClimatLabel::Date(d) => write!(f, "{d}"),
            ClimatLabel::Ordinal(n) => write!(f, "{n}"),
            ClimatLabel::Season(s) => f.write_str(s),
        }
    }
}

/// Maps a bucket key onto its real calendar date in the representative
/// year.
///
/// Anchors follow the canonical calendar step of each frequency:
/// month-end stamps for monthly buckets, midnight of the (month, day)
/// for daily, the exact hour for hourly, the last day of the season's
/// final month for seasonal, and December 31 for the whole-series
/// bucket.
///
/// # Errors
///
/// Returns [`ClimatologyError::LabelOutOfRange`] if the key names a
/// (month, day) that does not exist in the representative year. This
/// cannot happen for keys derived from real timestamps: a February 29
/// observation forces a leap representative year.
pub(crate) fn standard_label(
    key: &BucketKey,
    rep_year: i32,
) -> Result<NaiveDateTime, ClimatologyError> {
    let (month, day, hour) = match *key {
        BucketKey::Whole => (12, 31, 0),
        BucketKey::Season(spec) => {
            let end = spec.end_month();
            (end, days_in_month(rep_year, end)?, 0)
        }
        BucketKey::Month(m) => (m, days_in_month(rep_year, m)?, 0),
        BucketKey::MonthDay(m, d) => (m, d, 0),
        BucketKey::MonthDayHour(m, d, h) => (m, d, h),
    };
    NaiveDate::from_ymd_opt(rep_year, u32::from(month), u32::from(day))
        .and_then(|d| d.and_hms_opt(u32::from(hour), 0, 0))
        .ok_or(ClimatologyError::LabelOutOfRange {
            year: rep_year,
            month,
            day,
        })
}

/// Builds the synthetic labels for a run of bucket keys.
///
/// Hourly ordinals start at 0; daily and monthly ordinals start at 1;
/// seasonal buckets are labeled with the season acronym. Yearly keys
/// fall back to real dates and never reach this path.
pub(crate) fn ordinal_labels(keys: &[BucketKey], frequency: Frequency) -> Vec<ClimatLabel> {
    let start: u32 = match frequency {
        Frequency::Hourly => 0,
        _ => 1,
    };
    keys.iter()
        .enumerate()
        .map(|(i, key)| match key {
            BucketKey::Season(spec) => ClimatLabel::Season(spec.acronym()),
            _ => ClimatLabel::Ordinal(start + i as u32),
        })
        .collect()
}
