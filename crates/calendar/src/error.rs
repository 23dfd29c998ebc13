//! Error types for the helios-calendar crate.

/// Error type for all fallible operations in the helios-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a time-frequency name is not one of the supported set.
    #[error(
        "unsupported time-frequency '{given}' (options are yearly, seasonal, monthly, daily, hourly)"
    )]
    UnsupportedFrequency {
        /// The frequency name that was given.
        given: String,
    },

    /// Returned when a month value is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when a season specification does not hold exactly 3 months.
    #[error(
        "season months must contain exactly 3 integers representing months \
         (for example [12, 1, 2]), got {got}"
    )]
    SeasonLength {
        /// The number of entries that were given.
        got: usize,
    },
}
