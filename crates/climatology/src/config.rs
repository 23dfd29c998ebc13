//! Climatology configuration.

use helios_calendar::SeasonSpec;

/// Options controlling label generation and output shape.
///
/// Defaults follow [`ClimatConfig::new`]: synthetic ordinal labels, the
/// date index kept, no season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClimatConfig {
    keep_std_dates: bool,
    drop_date_index: bool,
    season: Option<SeasonSpec>,
}

impl ClimatConfig {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels buckets with real dates in the representative year instead
    /// of synthetic ordinals. Defaults to `false`.
    pub fn with_keep_std_dates(mut self, keep: bool) -> Self {
        self.keep_std_dates = keep;
        self
    }

    /// Marks the label axis as demoted: downstream writers should not
    /// materialize it as a value column. Defaults to `false`.
    pub fn with_drop_date_index(mut self, drop: bool) -> Self {
        self.drop_date_index = drop;
        self
    }

    /// Sets the season for seasonal frequency. Required there, ignored
    /// everywhere else.
    pub fn with_season(mut self, season: SeasonSpec) -> Self {
        self.season = Some(season);
        self
    }

    /// Returns true if buckets are labeled with representative-year dates.
    pub fn keep_std_dates(&self) -> bool {
        self.keep_std_dates
    }

    /// Returns true if the label axis is demoted.
    pub fn drop_date_index(&self) -> bool {
        self.drop_date_index
    }

    /// Returns the configured season, if any.
    pub fn season(&self) -> Option<SeasonSpec> {
        self.season
    }
}
