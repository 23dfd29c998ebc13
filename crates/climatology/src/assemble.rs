//! Output assembly: reduced buckets into the input's representation.

use ndarray::{ArrayD, Axis, IxDyn};

use helios_series::{Column, GriddedSeries, TabularSeries};

use crate::climatology::ClimatValues;
use crate::reduce::{ReducedGridded, ReducedTabular};

/// Suffix appended to every value-column name of a tabular climatology.
pub const CLIMAT_SUFFIX: &str = "_climat";

/// Turns reduced tabular buckets into climatology columns.
///
/// Column order follows the input; each output column carries the input
/// name with a [`CLIMAT_SUFFIX`] and holds one scalar per kept bucket.
pub(crate) fn assemble_tabular(series: &TabularSeries, reduced: &ReducedTabular) -> ClimatValues {
    let columns = series
        .columns()
        .iter()
        .enumerate()
        .map(|(j, col)| {
            let values: Vec<f64> = reduced.rows.iter().map(|row| row[j]).collect();
            Column::new(format!("{}{CLIMAT_SUFFIX}", col.name()), values)
        })
        .collect();
    ClimatValues::Tabular { columns }
}

/// Turns reduced gridded buckets into a climatology array.
///
/// The input's time axis is replaced in place by the label axis, renamed
/// to `label_name`; all other dimensions and auxiliary coordinates are
/// carried over unchanged.
pub(crate) fn assemble_gridded(
    series: &GriddedSeries,
    reduced: &ReducedGridded,
    label_name: &str,
) -> ClimatValues {
    let axis = series.time_axis();

    let mut shape = series.data().shape().to_vec();
    shape[axis] = reduced.slices.len();
    let mut data = ArrayD::zeros(IxDyn(&shape));
    for (i, slice) in reduced.slices.iter().enumerate() {
        data.index_axis_mut(Axis(axis), i).assign(slice);
    }

    let mut dims = series.dims().to_vec();
    dims[axis] = label_name.to_string();

    ClimatValues::Gridded {
        var_name: series.var_name().to_string(),
        dims,
        label_axis: axis,
        data,
        coords: series.coords().clone(),
    }
}
