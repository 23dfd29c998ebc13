//! Error types for the helios-climatology crate.

use helios_calendar::{CalendarError, Frequency};
use helios_series::SeriesError;

/// Error type for all fallible operations in the helios-climatology crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClimatologyError {
    /// Returned when a seasonal frequency is requested without season months.
    #[error(
        "frequency '{frequency}' requires season months \
         (an ordered triple such as [12, 1, 2])"
    )]
    MissingSeasonMonths {
        /// The frequency that required a season specification.
        frequency: Frequency,
    },

    /// A calendar-level failure (invalid month, malformed season spec, ...).
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A series-level failure (shape validation, unknown label, ...).
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Returned when a bucket key cannot be placed in the representative year.
    ///
    /// Unreachable for buckets derived from real timestamps: any (month,
    /// day) combination present in the data exists in the representative
    /// year, because a Feb 29 observation forces a leap representative year.
    #[error("no calendar date {year}-{month:02}-{day:02} in the representative year")]
    LabelOutOfRange {
        /// Representative year.
        year: i32,
        /// Month of the offending bucket key.
        month: u8,
        /// Day of the offending bucket key.
        day: u8,
    },
}
