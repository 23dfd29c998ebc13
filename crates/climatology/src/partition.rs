//! Calendar partitioner: distinct component values and bucket keys.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDateTime, Timelike};
use helios_calendar::{Frequency, SeasonSpec};

use crate::error::ClimatologyError;

/// The calendar-component key identifying one bucket.
///
/// Keys are compared by exact calendar-component equality; the same key
/// type drives both bucket reduction and the delta broadcast back onto
/// full-resolution series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    /// The single yearly bucket covering every row.
    Whole,
    /// The single seasonal bucket covering the season's months.
    Season(SeasonSpec),
    /// All rows in a given month, across years.
    Month(u8),
    /// All rows with a given (month, day), across years.
    MonthDay(u8, u8),
    /// All rows with a given (month, day, hour), across years.
    MonthDayHour(u8, u8, u8),
}

impl BucketKey {
    /// Returns true if `t` falls into this bucket.
    pub fn matches(&self, t: &NaiveDateTime) -> bool {
        let month = t.month() as u8;
        match *self {
            BucketKey::Whole => true,
            BucketKey::Season(spec) => spec.contains(month),
            BucketKey::Month(m) => month == m,
            BucketKey::MonthDay(m, d) => month == m && t.day() as u8 == d,
            BucketKey::MonthDayHour(m, d, h) => {
                month == m && t.day() as u8 == d && t.hour() as u8 == h
            }
        }
    }

    /// Returns the indices of all timestamps falling into this bucket.
    pub fn select(&self, times: &[NaiveDateTime]) -> Vec<usize> {
        times
            .iter()
            .enumerate()
            .filter(|(_, t)| self.matches(t))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Distinct calendar-component values observed in a time axis.
///
/// Only values actually present are recorded, not the theoretical
/// calendar range; the cross product of these values defines the bucket
/// keys for monthly, daily, and hourly frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPartition {
    years: Vec<i32>,
    months: Vec<u8>,
    days: Vec<u8>,
    hours: Vec<u8>,
}

impl CalendarPartition {
    /// Scans a time axis and records its distinct years, months, days,
    /// and hours, each sorted ascending.
    pub fn from_times(times: &[NaiveDateTime]) -> Self {
        let mut years = BTreeSet::new();
        let mut months = BTreeSet::new();
        let mut days = BTreeSet::new();
        let mut hours = BTreeSet::new();
        for t in times {
            years.insert(t.year());
            months.insert(t.month() as u8);
            days.insert(t.day() as u8);
            hours.insert(t.hour() as u8);
        }
        Self {
            years: years.into_iter().collect(),
            months: months.into_iter().collect(),
            days: days.into_iter().collect(),
            hours: hours.into_iter().collect(),
        }
    }

    /// Returns the distinct years, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the distinct months, ascending.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Returns the distinct days-of-month, ascending.
    pub fn days(&self) -> &[u8] {
        &self.days
    }

    /// Returns the distinct hours, ascending.
    pub fn hours(&self) -> &[u8] {
        &self.hours
    }

    /// Returns the representative year: the latest leap year present,
    /// else the latest year. `None` only for an empty partition.
    pub fn representative_year(&self) -> Option<i32> {
        helios_calendar::representative_year(&self.years)
    }

    /// Builds the bucket keys for a frequency.
    ///
    /// Monthly, daily, and hourly keys are the cross product of the
    /// distinct component values, nested month → day → hour ascending;
    /// combinations absent from the data yield empty buckets that are
    /// skipped during reduction. Yearly and seasonal produce one key.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::MissingSeasonMonths`] when `frequency`
    /// is seasonal and `season` is `None`.
    pub fn bucket_keys(
        &self,
        frequency: Frequency,
        season: Option<SeasonSpec>,
    ) -> Result<Vec<BucketKey>, ClimatologyError> {
        let keys = match frequency {
            Frequency::Yearly => vec![BucketKey::Whole],
            Frequency::Seasonal => {
                let spec = season.ok_or(ClimatologyError::MissingSeasonMonths { frequency })?;
                vec![BucketKey::Season(spec)]
            }
            Frequency::Monthly => self.months.iter().map(|&m| BucketKey::Month(m)).collect(),
            Frequency::Daily => {
                let mut keys = Vec::with_capacity(self.months.len() * self.days.len());
                for &m in &self.months {
                    for &d in &self.days {
                        keys.push(BucketKey::MonthDay(m, d));
                    }
                }
                keys
            }
            Frequency::Hourly => {
                let mut keys =
                    Vec::with_capacity(self.months.len() * self.days.len() * self.hours.len());
                for &m in &self.months {
                    for &d in &self.days {
                        for &h in &self.hours {
                            keys.push(BucketKey::MonthDayHour(m, d, h));
                        }
                    }
                }
                keys
            }
        };
        Ok(keys)
    }
}
