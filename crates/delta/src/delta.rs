//! Per-bucket deltas between two climatologies.

use std::collections::HashMap;

use ndarray::{ArrayD, Axis};
use tracing::debug;

use helios_climatology::{BucketKey, ClimatValues, Climatology};
use helios_series::SeriesKind;

use crate::config::DeltaType;
use crate::error::DeltaError;

/// Per-bucket delta values, in the climatologies' representation.
#[derive(Debug, Clone, PartialEq)]
pub enum DeltaValues {
    /// One row of per-column deltas per shared bucket.
    Tabular {
        /// Bucket-major rows, columns in input order.
        rows: Vec<Vec<f64>>,
    },
    /// One delta slice per shared bucket, shaped like the non-time axes.
    Gridded {
        /// Bucket-major slices.
        slices: Vec<ArrayD<f64>>,
    },
}

impl DeltaValues {
    /// Returns the representation kind the deltas were computed in.
    pub fn kind(&self) -> SeriesKind {
        match self {
            DeltaValues::Tabular { .. } => SeriesKind::Tabular,
            DeltaValues::Gridded { .. } => SeriesKind::Gridded,
        }
    }
}

/// The deltas between a truth climatology and a correction-target
/// climatology, keyed by calendar bucket.
///
/// Only buckets present in both climatologies survive; their order
/// follows the truth side.
#[derive(Debug, Clone, PartialEq)]
pub struct Delta {
    delta_type: DeltaType,
    keys: Vec<BucketKey>,
    values: DeltaValues,
}

impl Delta {
    /// Computes per-bucket deltas between two climatologies.
    ///
    /// Absolute deltas are `truth − other`, relative deltas `truth ÷
    /// other`, bucket by bucket over the keys shared by both sides.
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::RepresentationMismatch`] when the two
    /// climatologies use different representations,
    /// [`DeltaError::ColumnCountMismatch`] on tabular column-count
    /// disagreement, and [`DeltaError::ShapeMismatch`] on gridded
    /// slice-shape disagreement.
    pub fn between(
        truth: &Climatology,
        other: &Climatology,
        delta_type: DeltaType,
    ) -> Result<Self, DeltaError> {
        let other_index: HashMap<BucketKey, usize> = other
            .keys()
            .iter()
            .enumerate()
            .map(|(i, &key)| (key, i))
            .collect();

        let combine = |t: f64, o: f64| match delta_type {
            DeltaType::Absolute => t - o,
            DeltaType::Relative => t / o,
        };

        let mut keys = Vec::new();
        let values = match (truth.values(), other.values()) {
            (
                ClimatValues::Tabular {
                    columns: truth_cols,
                },
                ClimatValues::Tabular {
                    columns: other_cols,
                },
            ) => {
                if truth_cols.len() != other_cols.len() {
                    return Err(DeltaError::ColumnCountMismatch {
                        observed: truth_cols.len(),
                        reanalysis: other_cols.len(),
                    });
                }
                let mut rows = Vec::new();
                for (i, key) in truth.keys().iter().enumerate() {
                    let Some(&j) = other_index.get(key) else {
                        continue;
                    };
                    let row: Vec<f64> = truth_cols
                        .iter()
                        .zip(other_cols)
                        .map(|(t, o)| combine(t.values()[i], o.values()[j]))
                        .collect();
                    keys.push(*key);
                    rows.push(row);
                }
                DeltaValues::Tabular { rows }
            }
            (
                ClimatValues::Gridded {
                    label_axis: truth_axis,
                    data: truth_data,
                    ..
                },
                ClimatValues::Gridded {
                    label_axis: other_axis,
                    data: other_data,
                    ..
                },
            ) => {
                let mut slices = Vec::new();
                for (i, key) in truth.keys().iter().enumerate() {
                    let Some(&j) = other_index.get(key) else {
                        continue;
                    };
                    let t = truth_data.index_axis(Axis(*truth_axis), i);
                    let o = other_data.index_axis(Axis(*other_axis), j);
                    if t.shape() != o.shape() {
                        return Err(DeltaError::ShapeMismatch {
                            observed: t.shape().to_vec(),
                            reanalysis: o.shape().to_vec(),
                        });
                    }
                    let slice = match delta_type {
                        DeltaType::Absolute => &t - &o,
                        DeltaType::Relative => &t / &o,
                    };
                    keys.push(*key);
                    slices.push(slice);
                }
                DeltaValues::Gridded { slices }
            }
            (ClimatValues::Tabular { .. }, ClimatValues::Gridded { .. }) => {
                return Err(DeltaError::RepresentationMismatch {
                    observed: SeriesKind::Tabular,
                    reanalysis: SeriesKind::Gridded,
                });
            }
            (ClimatValues::Gridded { .. }, ClimatValues::Tabular { .. }) => {
                return Err(DeltaError::RepresentationMismatch {
                    observed: SeriesKind::Gridded,
                    reanalysis: SeriesKind::Tabular,
                });
            }
        };

        debug!(%delta_type, buckets = keys.len(), "computed per-bucket deltas");
        Ok(Self {
            delta_type,
            keys,
            values,
        })
    }

    /// Returns the delta type.
    pub fn delta_type(&self) -> DeltaType {
        self.delta_type
    }

    /// Returns the shared bucket keys, in truth order.
    pub fn keys(&self) -> &[BucketKey] {
        &self.keys
    }

    /// Returns the per-bucket delta values.
    pub fn values(&self) -> &DeltaValues {
        &self.values
    }

    /// Returns the number of shared buckets.
    pub fn n_buckets(&self) -> usize {
        self.keys.len()
    }
}
