//! Error types for the helios-delta crate.

use helios_climatology::ClimatologyError;
use helios_series::SeriesKind;

/// Error type for all fallible operations in the helios-delta crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeltaError {
    /// Returned when a delta-type name is not one of the supported set.
    #[error("unsupported delta type '{given}' (options are absolute, relative)")]
    UnsupportedDeltaType {
        /// The delta-type name that was given.
        given: String,
    },

    /// Returned when a preference name is not one of the supported set.
    #[error("unsupported preference '{given}' (options are observed, reanalysis)")]
    UnsupportedPreference {
        /// The preference name that was given.
        given: String,
    },

    /// Returned when the two input series use different representations.
    #[error(
        "representation mismatch: observed series is {observed}, \
         reanalysis series is {reanalysis}"
    )]
    RepresentationMismatch {
        /// Representation of the observed series.
        observed: SeriesKind,
        /// Representation of the reanalysis series.
        reanalysis: SeriesKind,
    },

    /// Returned when a delta is applied to a series in the other
    /// representation.
    #[error("cannot apply a {delta} delta to a {series} series")]
    DeltaKindMismatch {
        /// Representation of the correction target.
        series: SeriesKind,
        /// Representation the deltas were computed in.
        delta: SeriesKind,
    },

    /// Returned when the two tabular inputs carry different column counts.
    #[error("column count mismatch: observed has {observed}, reanalysis has {reanalysis}")]
    ColumnCountMismatch {
        /// Column count of the observed series.
        observed: usize,
        /// Column count of the reanalysis series.
        reanalysis: usize,
    },

    /// Returned when the two gridded inputs carry different non-time shapes.
    #[error("shape mismatch: observed slice is {observed:?}, reanalysis slice is {reanalysis:?}")]
    ShapeMismatch {
        /// Per-bucket slice shape of the observed series.
        observed: Vec<usize>,
        /// Per-bucket slice shape of the reanalysis series.
        reanalysis: Vec<usize>,
    },

    /// A climatology-level failure while reducing either input.
    #[error(transparent)]
    Climatology(#[from] ClimatologyError),

    /// A series-level failure while relabeling the corrected output.
    #[error(transparent)]
    Series(#[from] helios_series::SeriesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unsupported_delta_type() {
        let e = DeltaError::UnsupportedDeltaType {
            given: "scaled".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unsupported delta type 'scaled' (options are absolute, relative)"
        );
    }

    #[test]
    fn error_unsupported_preference() {
        let e = DeltaError::UnsupportedPreference {
            given: "model".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unsupported preference 'model' (options are observed, reanalysis)"
        );
    }

    #[test]
    fn error_representation_mismatch() {
        let e = DeltaError::RepresentationMismatch {
            observed: SeriesKind::Tabular,
            reanalysis: SeriesKind::Gridded,
        };
        assert_eq!(
            e.to_string(),
            "representation mismatch: observed series is tabular, reanalysis series is gridded"
        );
    }

    #[test]
    fn error_delta_kind_mismatch() {
        let e = DeltaError::DeltaKindMismatch {
            series: SeriesKind::Tabular,
            delta: SeriesKind::Gridded,
        };
        assert_eq!(
            e.to_string(),
            "cannot apply a gridded delta to a tabular series"
        );
    }

    #[test]
    fn error_column_count_mismatch() {
        let e = DeltaError::ColumnCountMismatch {
            observed: 2,
            reanalysis: 3,
        };
        assert_eq!(
            e.to_string(),
            "column count mismatch: observed has 2, reanalysis has 3"
        );
    }
}
