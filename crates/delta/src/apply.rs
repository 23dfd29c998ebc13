//! Broadcasting deltas onto a full-resolution series.

use ndarray::Axis;
use tracing::{debug, trace};

use helios_series::{GriddedSeries, SeriesKind, TabularSeries};

use crate::config::DeltaType;
use crate::delta::{Delta, DeltaValues};
use crate::error::DeltaError;

/// Applies per-bucket deltas to a tabular series in place.
///
/// Each bucket's row of deltas is combined into every series row whose
/// timestamp matches the bucket key, column by column in input order.
/// Buckets matching no rows are skipped.
///
/// # Errors
///
/// Returns [`DeltaError::DeltaKindMismatch`] for deltas computed in the
/// gridded representation and [`DeltaError::ColumnCountMismatch`] when
/// the delta row width differs from the series column count.
pub(crate) fn apply_tabular(series: &mut TabularSeries, delta: &Delta) -> Result<(), DeltaError> {
    let DeltaValues::Tabular { rows } = delta.values() else {
        return Err(DeltaError::DeltaKindMismatch {
            series: SeriesKind::Tabular,
            delta: delta.values().kind(),
        });
    };
    if let Some(row) = rows.first()
        && row.len() != series.n_columns()
    {
        return Err(DeltaError::ColumnCountMismatch {
            observed: row.len(),
            reanalysis: series.n_columns(),
        });
    }

    let mut corrected_rows = 0usize;
    for (key, row) in delta.keys().iter().zip(rows) {
        let indices = key.select(series.time());
        if indices.is_empty() {
            trace!(?key, "delta bucket matched no rows");
            continue;
        }
        corrected_rows += indices.len();
        for (column, &value) in series.columns_mut().iter_mut().zip(row) {
            let values = column.values_mut();
            for &idx in &indices {
                match delta.delta_type() {
                    DeltaType::Absolute => values[idx] += value,
                    DeltaType::Relative => values[idx] *= value,
                }
            }
        }
    }
    debug!(
        buckets = delta.n_buckets(),
        corrected_rows, "applied tabular deltas"
    );
    Ok(())
}

/// Applies per-bucket deltas to a gridded series in place.
///
/// Each bucket's delta slice is combined into every time-axis lane whose
/// timestamp matches the bucket key. Buckets matching no time steps are
/// skipped.
///
/// # Errors
///
/// Returns [`DeltaError::DeltaKindMismatch`] for deltas computed in the
/// tabular representation and [`DeltaError::ShapeMismatch`] when the
/// delta slices are not shaped like the series' non-time axes.
pub(crate) fn apply_gridded(series: &mut GriddedSeries, delta: &Delta) -> Result<(), DeltaError> {
    let DeltaValues::Gridded { slices } = delta.values() else {
        return Err(DeltaError::DeltaKindMismatch {
            series: SeriesKind::Gridded,
            delta: delta.values().kind(),
        });
    };
    let axis = Axis(series.time_axis());

    let mut lane_shape = series.data().shape().to_vec();
    lane_shape.remove(series.time_axis());
    if let Some(slice) = slices.first()
        && slice.shape() != lane_shape.as_slice()
    {
        return Err(DeltaError::ShapeMismatch {
            observed: slice.shape().to_vec(),
            reanalysis: lane_shape,
        });
    }

    let mut corrected_steps = 0usize;
    for (key, slice) in delta.keys().iter().zip(slices) {
        let indices = key.select(series.time());
        if indices.is_empty() {
            trace!(?key, "delta bucket matched no time steps");
            continue;
        }
        corrected_steps += indices.len();
        for &idx in &indices {
            let mut lane = series.data_mut().index_axis_mut(axis, idx);
            match delta.delta_type() {
                DeltaType::Absolute => lane += slice,
                DeltaType::Relative => lane *= slice,
            }
        }
    }
    debug!(
        buckets = delta.n_buckets(),
        corrected_steps, "applied gridded deltas"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use ndarray::ArrayD;

    use helios_calendar::Frequency;
    use helios_climatology::{ClimatConfig, Climatology, periodic_climatology};
    use helios_series::{Column, TimeSeries};
    use helios_stats::Statistic;

    use crate::config::DeltaType;

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn monthly_climat(series: &TimeSeries) -> Climatology {
        periodic_climatology(
            series,
            Statistic::Mean,
            Frequency::Monthly,
            &ClimatConfig::new().with_keep_std_dates(true),
        )
        .unwrap()
    }

    fn gridded_series(values: Vec<f64>) -> TimeSeries {
        let time = vec![ts(2020, 1, 5), ts(2020, 2, 5)];
        let data = ArrayD::from_shape_vec(vec![2], values).unwrap();
        TimeSeries::Gridded(
            GriddedSeries::new("precip", vec!["time".to_string()], data, "time", time).unwrap(),
        )
    }

    fn tabular_series(values: Vec<f64>) -> TimeSeries {
        let time = vec![ts(2020, 1, 5), ts(2020, 2, 5)];
        TimeSeries::Tabular(
            TabularSeries::new("time", time, vec![Column::new("precip", values)]).unwrap(),
        )
    }

    #[test]
    fn tabular_apply_rejects_gridded_deltas() {
        let truth = monthly_climat(&gridded_series(vec![4.0, 6.0]));
        let other = monthly_climat(&gridded_series(vec![2.0, 3.0]));
        let delta = Delta::between(&truth, &other, DeltaType::Absolute).unwrap();

        let TimeSeries::Tabular(mut target) = tabular_series(vec![1.0, 2.0]) else {
            unreachable!();
        };
        let err = apply_tabular(&mut target, &delta).unwrap_err();
        assert_eq!(
            err,
            DeltaError::DeltaKindMismatch {
                series: SeriesKind::Tabular,
                delta: SeriesKind::Gridded,
            }
        );
        // the target must not be touched on the error path
        assert_eq!(target.columns()[0].values(), &[1.0, 2.0]);
    }

    #[test]
    fn gridded_apply_rejects_tabular_deltas() {
        let truth = monthly_climat(&tabular_series(vec![4.0, 6.0]));
        let other = monthly_climat(&tabular_series(vec![2.0, 3.0]));
        let delta = Delta::between(&truth, &other, DeltaType::Absolute).unwrap();

        let TimeSeries::Gridded(mut target) = gridded_series(vec![1.0, 2.0]) else {
            unreachable!();
        };
        let err = apply_gridded(&mut target, &delta).unwrap_err();
        assert_eq!(
            err,
            DeltaError::DeltaKindMismatch {
                series: SeriesKind::Gridded,
                delta: SeriesKind::Tabular,
            }
        );
        assert_eq!(target.data().as_slice().unwrap(), &[1.0, 2.0]);
    }
}
