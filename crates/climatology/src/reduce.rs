//! Bucket reducer: per-key row/slice selection and reduction.

use ndarray::{ArrayD, Axis};

use helios_series::{GriddedSeries, TabularSeries};
use helios_stats::Statistic;
use tracing::trace;

use crate::partition::BucketKey;

/// Reduced tabular buckets in key order: one row of per-column scalars
/// per non-empty bucket (bucket × variable layout).
#[derive(Debug, Clone)]
pub(crate) struct ReducedTabular {
    pub(crate) keys: Vec<BucketKey>,
    pub(crate) rows: Vec<Vec<f64>>,
}

/// Reduced gridded buckets in key order: one time-collapsed slice per
/// non-empty bucket.
#[derive(Debug, Clone)]
pub(crate) struct ReducedGridded {
    pub(crate) keys: Vec<BucketKey>,
    pub(crate) slices: Vec<ArrayD<f64>>,
}

/// Reduces every non-empty bucket of a tabular series.
///
/// Iteration follows the key order handed in (month → day → hour
/// ascending from the partitioner), which fixes the output row order.
/// Empty buckets are skipped silently.
pub(crate) fn reduce_tabular(
    series: &TabularSeries,
    keys: &[BucketKey],
    statistic: Statistic,
) -> ReducedTabular {
    let mut out_keys = Vec::new();
    let mut rows = Vec::new();

    for key in keys {
        let indices = key.select(series.time());
        if indices.is_empty() {
            trace!(?key, "empty bucket skipped");
            continue;
        }
        let row: Vec<f64> = series
            .columns()
            .iter()
            .map(|col| {
                let subset: Vec<f64> = indices.iter().map(|&i| col.values()[i]).collect();
                statistic.apply(&subset)
            })
            .collect();
        out_keys.push(*key);
        rows.push(row);
    }

    ReducedTabular {
        keys: out_keys,
        rows,
    }
}

/// Reduces every non-empty bucket of a gridded series along its time axis.
///
/// Buckets are selected with the same key index sets as the tabular path,
/// so both representations see identical bucket contents for the same
/// input semantics.
pub(crate) fn reduce_gridded(
    series: &GriddedSeries,
    keys: &[BucketKey],
    statistic: Statistic,
) -> ReducedGridded {
    let axis = Axis(series.time_axis());
    let mut out_keys = Vec::new();
    let mut slices = Vec::new();

    for key in keys {
        let indices = key.select(series.time());
        if indices.is_empty() {
            trace!(?key, "empty bucket skipped");
            continue;
        }
        let subset = series.data().select(axis, &indices);
        let reduced = subset.map_axis(axis, |lane| {
            let values: Vec<f64> = lane.iter().copied().collect();
            statistic.apply(&values)
        });
        out_keys.push(*key);
        slices.push(reduced);
    }

    ReducedGridded {
        keys: out_keys,
        slices,
    }
}
