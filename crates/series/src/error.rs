//! Error types for the helios-series crate.

/// Error type for all fallible operations in the helios-series crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a series holds no time steps.
    #[error("series holds no time steps")]
    EmptySeries,

    /// Returned when a tabular series has no value columns.
    #[error("tabular series must hold at least one value column")]
    NoValueColumns,

    /// Returned when a value column's length differs from the time column.
    #[error("column '{column}' has {got} rows but the time column has {expected}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Number of time steps.
        expected: usize,
        /// Number of rows in the column.
        got: usize,
    },

    /// Returned when two columns share a name.
    #[error("duplicate column or dimension name '{name}'")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// Returned when the dimension-name count differs from the array rank.
    #[error("got {names} dimension names for an array of rank {rank}")]
    DimensionCountMismatch {
        /// Number of dimension names supplied.
        names: usize,
        /// Rank of the data array.
        rank: usize,
    },

    /// Returned when the named time dimension is absent from the dimension list.
    #[error("time dimension '{name}' is not among the array dimensions")]
    UnknownTimeDimension {
        /// The missing dimension name.
        name: String,
    },

    /// Returned when the time-axis extent differs from the timestamp count.
    #[error("time axis has extent {axis_len} but {timestamps} timestamps were supplied")]
    TimeLengthMismatch {
        /// Extent of the time axis in the data array.
        axis_len: usize,
        /// Number of timestamps supplied.
        timestamps: usize,
    },

    /// Returned when an auxiliary coordinate's length differs from its dimension.
    #[error("coordinate '{name}' has {got} entries but dimension extent is {expected}")]
    CoordLengthMismatch {
        /// Name of the coordinate.
        name: String,
        /// Extent of the matching dimension.
        expected: usize,
        /// Number of coordinate entries supplied.
        got: usize,
    },

    /// Returned when a label exists neither as a dimension nor as a coordinate.
    #[error("'{name}' is neither a dimension nor a coordinate of the series")]
    UnknownLabel {
        /// The label that could not be found.
        name: String,
    },
}
