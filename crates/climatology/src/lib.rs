//! # helios-climatology
//!
//! Periodic climatological statistics over calendar-aligned buckets.
//!
//! A climatology partitions a time series into buckets keyed by calendar
//! components (month, day-of-month, hour) pooled across all years, applies
//! one statistic within each bucket, and labels the result either with
//! synthetic ordinals or with real dates in a representative year. Both
//! tabular and gridded series are supported; the output stays in the
//! input's representation.
//!
//! Buckets are the cross product of the component values actually present
//! in the data, iterated month → day → hour ascending; combinations that
//! never occur yield empty buckets and are skipped.
//!
//! ```
//! use chrono::NaiveDate;
//! use helios_calendar::Frequency;
//! use helios_climatology::{periodic_climatology, ClimatConfig, ClimatValues};
//! use helios_series::{Column, TabularSeries, TimeSeries};
//! use helios_stats::Statistic;
//!
//! let time: Vec<_> = [(2020, 1, 10), (2020, 2, 10), (2021, 1, 10)]
//!     .iter()
//!     .map(|&(y, m, d)| {
//!         NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
//!     })
//!     .collect();
//! let series = TimeSeries::Tabular(
//!     TabularSeries::new("time", time, vec![Column::new("precip", vec![2.0, 5.0, 4.0])])
//!         .unwrap(),
//! );
//!
//! let climat = periodic_climatology(
//!     &series,
//!     Statistic::Mean,
//!     Frequency::Monthly,
//!     &ClimatConfig::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(climat.n_buckets(), 2);
//! assert_eq!(climat.label_name(), "month_of_year");
//! let ClimatValues::Tabular { columns } = climat.values() else { unreachable!() };
//! assert_eq!(columns[0].name(), "precip_climat");
//! assert_eq!(columns[0].values(), &[3.0, 5.0]);
//! ```

mod assemble;
mod climatology;
mod config;
mod error;
mod label;
mod partition;
mod reduce;

use tracing::debug;

use helios_calendar::Frequency;
use helios_series::{SeriesError, TimeSeries};
use helios_stats::Statistic;

pub use assemble::CLIMAT_SUFFIX;
pub use climatology::{ClimatValues, Climatology};
pub use config::ClimatConfig;
pub use error::ClimatologyError;
pub use label::ClimatLabel;
pub use partition::{BucketKey, CalendarPartition};

use assemble::{assemble_gridded, assemble_tabular};
use label::{ordinal_labels, standard_label};
use reduce::{reduce_gridded, reduce_tabular};

/// Computes the periodic climatology of a series.
///
/// Buckets are derived from the series' own time axis, reduced with
/// `statistic`, and labeled per `config`: synthetic ordinals by default,
/// or real dates in the representative year (the latest leap year present,
/// else the latest year) with `keep_std_dates`.
///
/// In ordinal mode the label axis is renamed to the frequency's ordinal
/// name (`month_of_year`, `day_of_year`, `hour_of_year`, `season`); yearly
/// climatologies and date-labeled outputs keep the input's time name.
///
/// # Errors
///
/// Returns [`ClimatologyError::MissingSeasonMonths`] for a seasonal
/// frequency without a configured season. Label construction failures
/// cannot occur for buckets derived from real timestamps.
pub fn periodic_climatology(
    series: &TimeSeries,
    statistic: Statistic,
    frequency: Frequency,
    config: &ClimatConfig,
) -> Result<Climatology, ClimatologyError> {
    let partition = CalendarPartition::from_times(series.time());
    let keys = partition.bucket_keys(frequency, config.season())?;
    let rep_year = partition
        .representative_year()
        .ok_or(SeriesError::EmptySeries)?;

    debug!(
        %frequency,
        %statistic,
        kind = %series.kind(),
        candidate_buckets = keys.len(),
        rep_year,
        "computing periodic climatology"
    );

    let label_name = match (config.keep_std_dates(), frequency.ordinal_label()) {
        (false, Some(name)) => name.to_string(),
        _ => series.time_name().to_string(),
    };

    let (kept, values) = match series {
        TimeSeries::Tabular(t) => {
            let reduced = reduce_tabular(t, &keys, statistic);
            let values = assemble_tabular(t, &reduced);
            (reduced.keys, values)
        }
        TimeSeries::Gridded(g) => {
            let reduced = reduce_gridded(g, &keys, statistic);
            let values = assemble_gridded(g, &reduced, &label_name);
            (reduced.keys, values)
        }
    };

    let labels = if config.keep_std_dates() {
        kept.iter()
            .map(|key| standard_label(key, rep_year).map(ClimatLabel::Date))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        ordinal_labels(&kept, frequency)
    };

    debug!(buckets = kept.len(), "periodic climatology assembled");

    Ok(Climatology::new(
        frequency,
        statistic,
        label_name,
        labels,
        kept,
        config.drop_date_index(),
        values,
    ))
}
