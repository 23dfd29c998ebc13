//! # helios-delta
//!
//! Delta-change bias correction driven by periodic climatologies.
//!
//! Two series covering the same variable — observations and a reanalysis
//! product — are reduced to climatologies over the same calendar buckets.
//! The preferred series acts as truth; per-bucket deltas (`truth − other`
//! or `truth ÷ other`) are then broadcast back onto a full-resolution copy
//! of the other series, pulling it toward the truth's climatology. Rows
//! are matched to buckets by exact calendar components, so the correction
//! is insensitive to year coverage differences between the two inputs.
//!
//! ```
//! use chrono::NaiveDate;
//! use helios_calendar::Frequency;
//! use helios_delta::{compute_and_apply_deltas, DeltaConfig, DeltaType, Preference};
//! use helios_series::{Column, TabularSeries, TimeSeries};
//!
//! let time: Vec<_> = [(2020, 1, 5), (2020, 1, 20), (2020, 2, 5)]
//!     .iter()
//!     .map(|&(y, m, d)| {
//!         NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
//!     })
//!     .collect();
//! let observed = TimeSeries::Tabular(
//!     TabularSeries::new(
//!         "time",
//!         time.clone(),
//!         vec![Column::new("precip", vec![3.0, 5.0, 8.0])],
//!     )
//!     .unwrap(),
//! );
//! // reanalysis runs 1.0 too low everywhere
//! let reanalysis = TimeSeries::Tabular(
//!     TabularSeries::new(
//!         "time",
//!         time,
//!         vec![Column::new("precip", vec![2.0, 4.0, 7.0])],
//!     )
//!     .unwrap(),
//! );
//!
//! let corrected = compute_and_apply_deltas(
//!     &observed,
//!     &reanalysis,
//!     Frequency::Monthly,
//!     &DeltaConfig::new(DeltaType::Absolute, Preference::Observed),
//! )
//! .unwrap();
//!
//! let TimeSeries::Tabular(corrected) = corrected else { unreachable!() };
//! assert_eq!(corrected.columns()[0].values(), &[3.0, 5.0, 8.0]);
//! ```

mod apply;
mod config;
mod delta;
mod error;

use tracing::debug;

use helios_calendar::Frequency;
use helios_climatology::{ClimatConfig, periodic_climatology};
use helios_series::TimeSeries;

pub use config::{DeltaConfig, DeltaType, Preference};
pub use delta::{Delta, DeltaValues};
pub use error::DeltaError;

use apply::{apply_gridded, apply_tabular};

/// Corrects the non-preferred series toward the preferred one.
///
/// Both inputs are reduced to climatologies over `frequency` with the
/// configured statistic; the per-bucket deltas between them are broadcast
/// onto a full-resolution copy of the non-preferred series, which is
/// returned with its time axis renamed to match the preferred series.
/// Rows whose bucket is absent from either climatology are returned
/// unchanged.
///
/// # Errors
///
/// Returns [`DeltaError::RepresentationMismatch`] when the inputs use
/// different representations, a wrapped [`helios_climatology`] error when
/// either climatology fails (e.g. a seasonal frequency without season
/// months), and a width or shape mismatch error when the two inputs do
/// not describe the same variables.
pub fn compute_and_apply_deltas(
    observed: &TimeSeries,
    reanalysis: &TimeSeries,
    frequency: Frequency,
    config: &DeltaConfig,
) -> Result<TimeSeries, DeltaError> {
    if observed.kind() != reanalysis.kind() {
        return Err(DeltaError::RepresentationMismatch {
            observed: observed.kind(),
            reanalysis: reanalysis.kind(),
        });
    }

    let mut climat_config = ClimatConfig::new().with_keep_std_dates(true);
    if let Some(season) = config.season() {
        climat_config = climat_config.with_season(season);
    }

    debug!(
        %frequency,
        delta_type = %config.delta_type(),
        preference = %config.preference(),
        statistic = %config.statistic(),
        "computing delta correction"
    );

    let observed_climat =
        periodic_climatology(observed, config.statistic(), frequency, &climat_config)?;
    let reanalysis_climat =
        periodic_climatology(reanalysis, config.statistic(), frequency, &climat_config)?;

    let (truth_climat, other_climat, truth_series, target) = match config.preference() {
        Preference::Observed => (observed_climat, reanalysis_climat, observed, reanalysis),
        Preference::Reanalysis => (reanalysis_climat, observed_climat, reanalysis, observed),
    };

    let delta = Delta::between(&truth_climat, &other_climat, config.delta_type())?;

    let mut corrected = target.clone();
    match &mut corrected {
        TimeSeries::Tabular(series) => {
            series.set_time_name(truth_series.time_name());
            apply_tabular(series, &delta)?;
        }
        TimeSeries::Gridded(series) => {
            let old = series.time_name().to_string();
            let outcome = series.relabel(&old, truth_series.time_name())?;
            debug!(?outcome, from = %old, to = %truth_series.time_name(), "aligned time label");
            apply_gridded(series, &delta)?;
        }
    }
    Ok(corrected)
}
