//! Gridded time series: a labeled N-dimensional array with one time axis.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use ndarray::ArrayD;

use crate::error::SeriesError;

/// Outcome of relabeling a series axis.
///
/// Relabeling first tries the dimension list; if the old label exists only
/// as an auxiliary coordinate, the coordinate entry is renamed instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelabelOutcome {
    /// The label was renamed on the dimension list.
    RenamedDimension,
    /// The label existed only as a coordinate and was renamed there.
    RenamedCoordinate,
}

/// A gridded time series: an N-dimensional labeled array with one
/// dimension designated as time.
///
/// Non-time dimensions (e.g. spatial axes) may carry auxiliary coordinate
/// vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct GriddedSeries {
    var_name: String,
    dims: Vec<String>,
    data: ArrayD<f64>,
    time_axis: usize,
    time: Vec<NaiveDateTime>,
    coords: BTreeMap<String, Vec<f64>>,
}

impl GriddedSeries {
    /// Creates a new `GriddedSeries` after validating shape.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError`] if the dimension-name count differs from the
    /// array rank, names repeat, `time_name` is not among the dimensions,
    /// the series is empty, or the time-axis extent differs from the
    /// timestamp count.
    pub fn new(
        var_name: impl Into<String>,
        dims: Vec<String>,
        data: ArrayD<f64>,
        time_name: &str,
        time: Vec<NaiveDateTime>,
    ) -> Result<Self, SeriesError> {
        if dims.len() != data.ndim() {
            return Err(SeriesError::DimensionCountMismatch {
                names: dims.len(),
                rank: data.ndim(),
            });
        }
        for (i, name) in dims.iter().enumerate() {
            if dims[..i].contains(name) {
                return Err(SeriesError::DuplicateName { name: name.clone() });
            }
        }
        let time_axis = dims
            .iter()
            .position(|d| d == time_name)
            .ok_or_else(|| SeriesError::UnknownTimeDimension {
                name: time_name.to_string(),
            })?;
        if time.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if data.shape()[time_axis] != time.len() {
            return Err(SeriesError::TimeLengthMismatch {
                axis_len: data.shape()[time_axis],
                timestamps: time.len(),
            });
        }
        Ok(Self {
            var_name: var_name.into(),
            dims,
            data,
            time_axis,
            time,
            coords: BTreeMap::new(),
        })
    }

    /// Attaches an auxiliary coordinate vector.
    ///
    /// If `name` matches a dimension, the length must equal that
    /// dimension's extent. Coordinates that do not correspond to any
    /// dimension are allowed; they are the "exists only as a coordinate"
    /// case of relabeling.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::CoordLengthMismatch`] on an extent mismatch.
    pub fn with_coord(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let name = name.into();
        if let Some(axis) = self.dims.iter().position(|d| *d == name)
            && self.data.shape()[axis] != values.len()
        {
            return Err(SeriesError::CoordLengthMismatch {
                name,
                expected: self.data.shape()[axis],
                got: values.len(),
            });
        }
        self.coords.insert(name, values);
        Ok(self)
    }

    /// Returns the variable name.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// Returns the dimension names in axis order.
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Returns the name of the time dimension.
    pub fn time_name(&self) -> &str {
        &self.dims[self.time_axis]
    }

    /// Returns the position of the time axis.
    pub fn time_axis(&self) -> usize {
        self.time_axis
    }

    /// Returns the timestamps along the time axis.
    pub fn time(&self) -> &[NaiveDateTime] {
        &self.time
    }

    /// Returns the data array.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Returns the data array mutably, for in-place correction.
    pub fn data_mut(&mut self) -> &mut ArrayD<f64> {
        &mut self.data
    }

    /// Returns the auxiliary coordinates.
    pub fn coords(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.coords
    }

    /// Renames a label, trying the dimension list first and falling back
    /// to the auxiliary coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::UnknownLabel`] if `old` exists neither as a
    /// dimension nor as a coordinate, and [`SeriesError::DuplicateName`]
    /// if `new` is already a dimension.
    pub fn relabel(&mut self, old: &str, new: &str) -> Result<RelabelOutcome, SeriesError> {
        if old == new {
            return Ok(RelabelOutcome::RenamedDimension);
        }
        if self.dims.iter().any(|d| d == new) {
            return Err(SeriesError::DuplicateName {
                name: new.to_string(),
            });
        }
        if let Some(axis) = self.dims.iter().position(|d| d == old) {
            self.dims[axis] = new.to_string();
            if let Some(values) = self.coords.remove(old) {
                self.coords.insert(new.to_string(), values);
            }
            Ok(RelabelOutcome::RenamedDimension)
        } else if let Some(values) = self.coords.remove(old) {
            self.coords.insert(new.to_string(), values);
            Ok(RelabelOutcome::RenamedCoordinate)
        } else {
            Err(SeriesError::UnknownLabel {
                name: old.to_string(),
            })
        }
    }
}
