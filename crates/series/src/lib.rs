//! # helios-series
//!
//! Time-series containers for periodic climatology statistics.
//!
//! A [`TimeSeries`] is either *tabular* (ordered rows, one time column,
//! named value columns) or *gridded* (an N-dimensional labeled array with
//! one time dimension). The representation kind is determined once per
//! input and threaded explicitly through every stage; the two kinds are
//! never mixed within one call.
//!
//! ```
//! use chrono::NaiveDate;
//! use helios_series::{Column, TabularSeries, TimeSeries, SeriesKind};
//!
//! let time = vec![
//!     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
//!     NaiveDate::from_ymd_opt(2020, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap(),
//! ];
//! let series = TabularSeries::new("time", time, vec![Column::new("precip", vec![0.0, 2.5])])
//!     .unwrap();
//! let series = TimeSeries::Tabular(series);
//! assert_eq!(series.kind(), SeriesKind::Tabular);
//! assert_eq!(series.len(), 2);
//! ```

mod error;
mod gridded;
mod tabular;

use std::fmt;

use chrono::NaiveDateTime;

pub use error::SeriesError;
pub use gridded::{GriddedSeries, RelabelOutcome};
pub use tabular::{Column, TabularSeries};

/// The representation kind of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Ordered rows with named columns.
    Tabular,
    /// Labeled N-dimensional array.
    Gridded,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Tabular => f.write_str("tabular"),
            SeriesKind::Gridded => f.write_str("gridded"),
        }
    }
}

/// A time-indexed series in one of the two supported representations.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeSeries {
    /// Tabular representation.
    Tabular(TabularSeries),
    /// Gridded representation.
    Gridded(GriddedSeries),
}

impl TimeSeries {
    /// Returns the representation kind.
    pub fn kind(&self) -> SeriesKind {
        match self {
            TimeSeries::Tabular(_) => SeriesKind::Tabular,
            TimeSeries::Gridded(_) => SeriesKind::Gridded,
        }
    }

    /// Returns the timestamps of the time axis.
    pub fn time(&self) -> &[NaiveDateTime] {
        match self {
            TimeSeries::Tabular(t) => t.time(),
            TimeSeries::Gridded(g) => g.time(),
        }
    }

    /// Returns the name of the time column or dimension.
    pub fn time_name(&self) -> &str {
        match self {
            TimeSeries::Tabular(t) => t.time_name(),
            TimeSeries::Gridded(g) => g.time_name(),
        }
    }

    /// Returns the number of time steps.
    pub fn len(&self) -> usize {
        self.time().len()
    }

    /// Returns true if the series holds no time steps.
    ///
    /// Constructors reject empty series, so this is false for any value
    /// built through the public API.
    pub fn is_empty(&self) -> bool {
        self.time().is_empty()
    }
}

impl From<TabularSeries> for TimeSeries {
    fn from(series: TabularSeries) -> Self {
        TimeSeries::Tabular(series)
    }
}

impl From<GriddedSeries> for TimeSeries {
    fn from(series: GriddedSeries) -> Self {
        TimeSeries::Gridded(series)
    }
}
