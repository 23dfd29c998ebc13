//! Tabular time series: ordered rows, one time column, named value columns.

use chrono::NaiveDateTime;

use crate::error::SeriesError;

/// A named numeric value column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    /// Creates a new column.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the column values mutably.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Returns a copy of this column under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: self.values.clone(),
        }
    }
}

/// A tabular time series: one time column and one or more value columns,
/// with significant column order.
///
/// Rows are ordered by the caller; the container never reorders them.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularSeries {
    time_name: String,
    time: Vec<NaiveDateTime>,
    columns: Vec<Column>,
}

impl TabularSeries {
    /// Creates a new `TabularSeries` after validating shape.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError`] if the series is empty, holds no value
    /// columns, any column length differs from the time column, or two
    /// columns share a name.
    pub fn new(
        time_name: impl Into<String>,
        time: Vec<NaiveDateTime>,
        columns: Vec<Column>,
    ) -> Result<Self, SeriesError> {
        if time.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        if columns.is_empty() {
            return Err(SeriesError::NoValueColumns);
        }
        for col in &columns {
            if col.values.len() != time.len() {
                return Err(SeriesError::ColumnLengthMismatch {
                    column: col.name.clone(),
                    expected: time.len(),
                    got: col.values.len(),
                });
            }
        }
        let time_name = time_name.into();
        for (i, col) in columns.iter().enumerate() {
            let clash = col.name == time_name
                || columns[..i].iter().any(|other| other.name == col.name);
            if clash {
                return Err(SeriesError::DuplicateName {
                    name: col.name.clone(),
                });
            }
        }
        Ok(Self {
            time_name,
            time,
            columns,
        })
    }

    /// Returns the name of the time column.
    pub fn time_name(&self) -> &str {
        &self.time_name
    }

    /// Renames the time column.
    pub fn set_time_name(&mut self, name: impl Into<String>) {
        self.time_name = name.into();
    }

    /// Returns the timestamps.
    pub fn time(&self) -> &[NaiveDateTime] {
        &self.time
    }

    /// Returns the value columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the value columns mutably, for in-place correction.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.time.len()
    }

    /// Returns the number of value columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}
