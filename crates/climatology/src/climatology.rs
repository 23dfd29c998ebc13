//! Assembled climatology output.

use std::collections::BTreeMap;

use ndarray::ArrayD;

use helios_calendar::Frequency;
use helios_series::Column;
use helios_stats::Statistic;

use crate::label::ClimatLabel;
use crate::partition::BucketKey;

/// The reduced values of a climatology, in the input's representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ClimatValues {
    /// One value column per input column, renamed with a `_climat` suffix;
    /// each column holds one scalar per non-empty bucket.
    Tabular {
        /// Value columns in input order.
        columns: Vec<Column>,
    },
    /// The input array with its time axis replaced by the label axis.
    Gridded {
        /// Variable name, unchanged from the input.
        var_name: String,
        /// Dimension names in axis order; the label axis carries the
        /// label name.
        dims: Vec<String>,
        /// Position of the label axis (the input's time-axis position).
        label_axis: usize,
        /// Reduced data, one slice per non-empty bucket.
        data: ArrayD<f64>,
        /// Auxiliary coordinates carried over from the input.
        coords: BTreeMap<String, Vec<f64>>,
    },
}

/// A periodic climatology: one reduced value set per non-empty calendar
/// bucket, labeled and ordered month → day → hour ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Climatology {
    frequency: Frequency,
    statistic: Statistic,
    label_name: String,
    labels: Vec<ClimatLabel>,
    keys: Vec<BucketKey>,
    date_index_dropped: bool,
    values: ClimatValues,
}

impl Climatology {
    pub(crate) fn new(
        frequency: Frequency,
        statistic: Statistic,
        label_name: String,
        labels: Vec<ClimatLabel>,
        keys: Vec<BucketKey>,
        date_index_dropped: bool,
        values: ClimatValues,
    ) -> Self {
        Self {
            frequency,
            statistic,
            label_name,
            labels,
            keys,
            date_index_dropped,
            values,
        }
    }

    /// Returns the frequency the buckets were built for.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the statistic applied within each bucket.
    pub fn statistic(&self) -> Statistic {
        self.statistic
    }

    /// Returns the name of the label axis.
    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    /// Returns the bucket labels, aligned with [`Climatology::keys`].
    pub fn labels(&self) -> &[ClimatLabel] {
        &self.labels
    }

    /// Returns the calendar keys of the non-empty buckets, in output order.
    ///
    /// Keys identify buckets exactly; matching a correction target's
    /// timestamps against them recovers the rows each bucket value
    /// applies to.
    pub fn keys(&self) -> &[BucketKey] {
        &self.keys
    }

    /// Returns true if the label axis was demoted from the output.
    pub fn date_index_dropped(&self) -> bool {
        self.date_index_dropped
    }

    /// Returns the reduced values.
    pub fn values(&self) -> &ClimatValues {
        &self.values
    }

    /// Returns the number of non-empty buckets.
    pub fn n_buckets(&self) -> usize {
        self.keys.len()
    }
}
