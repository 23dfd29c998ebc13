//! End-to-end delta-correction scenarios.

use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime};
use ndarray::ArrayD;

use helios_calendar::{Frequency, SeasonSpec};
use helios_delta::{DeltaConfig, DeltaError, DeltaType, Preference, compute_and_apply_deltas};
use helios_series::{Column, GriddedSeries, SeriesKind, TabularSeries, TimeSeries};

fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn tabular(time_name: &str, time: Vec<NaiveDateTime>, values: Vec<f64>) -> TimeSeries {
    TimeSeries::Tabular(
        TabularSeries::new(time_name, time, vec![Column::new("precip", values)]).unwrap(),
    )
}

fn column_values(series: &TimeSeries) -> &[f64] {
    let TimeSeries::Tabular(t) = series else {
        panic!("tabular series expected");
    };
    t.columns()[0].values()
}

#[test]
fn absolute_monthly_correction() {
    let time = vec![
        ts(2020, 1, 5),
        ts(2020, 1, 20),
        ts(2020, 2, 5),
        ts(2020, 2, 20),
    ];
    // monthly means: observed 4 and 9, reanalysis 2 and 5
    let observed = tabular("time", time.clone(), vec![3.0, 5.0, 8.0, 10.0]);
    let reanalysis = tabular("time", time, vec![1.0, 3.0, 5.0, 5.0]);

    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Observed),
    )
    .unwrap();

    // January shifts by +2, February by +4
    assert_eq!(column_values(&corrected), &[3.0, 5.0, 9.0, 9.0]);
}

#[test]
fn relative_identity_leaves_values_unchanged() {
    let time = vec![ts(2020, 1, 5), ts(2020, 2, 5)];
    let observed = tabular("time", time.clone(), vec![3.0, 7.0]);
    let reanalysis = tabular("time", time, vec![3.0, 7.0]);

    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Relative, Preference::Observed),
    )
    .unwrap();

    assert_eq!(column_values(&corrected), &[3.0, 7.0]);
}

#[test]
fn relative_correction_rescales_per_bucket() {
    let time = vec![ts(2020, 1, 5), ts(2020, 1, 20), ts(2020, 2, 5)];
    // observed is exactly double the reanalysis in every month
    let observed = tabular("time", time.clone(), vec![4.0, 8.0, 10.0]);
    let reanalysis = tabular("time", time, vec![2.0, 4.0, 5.0]);

    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Relative, Preference::Observed),
    )
    .unwrap();

    for (got, want) in column_values(&corrected).iter().zip([4.0, 8.0, 10.0]) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
}

#[test]
fn reanalysis_preference_corrects_observed() {
    let time = vec![
        ts(2020, 1, 5),
        ts(2020, 1, 20),
        ts(2020, 2, 5),
        ts(2020, 2, 20),
    ];
    let observed = tabular("time", time.clone(), vec![3.0, 5.0, 8.0, 10.0]);
    let reanalysis = tabular("time", time, vec![1.0, 3.0, 5.0, 5.0]);

    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Reanalysis),
    )
    .unwrap();

    // January shifts by -2, February by -4, applied to the observed copy
    assert_eq!(column_values(&corrected), &[1.0, 3.0, 4.0, 6.0]);
}

#[test]
fn seasonal_correction_only_touches_season_months() {
    let time = vec![
        ts(2019, 12, 15),
        ts(2020, 1, 15),
        ts(2020, 2, 15),
        ts(2020, 7, 15),
    ];
    // DJF means: observed 6, reanalysis 3; July stays out of the season
    let observed = tabular("time", time.clone(), vec![4.0, 6.0, 8.0, 100.0]);
    let reanalysis = tabular("time", time, vec![2.0, 3.0, 4.0, 50.0]);

    let djf = SeasonSpec::new([12, 1, 2]).unwrap();
    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Seasonal,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Observed).with_season(djf),
    )
    .unwrap();

    assert_eq!(column_values(&corrected), &[5.0, 6.0, 7.0, 50.0]);
}

#[test]
fn seasonal_without_season_months_fails() {
    let time = vec![ts(2020, 1, 5)];
    let observed = tabular("time", time.clone(), vec![1.0]);
    let reanalysis = tabular("time", time, vec![2.0]);

    let err = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Seasonal,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Observed),
    )
    .unwrap_err();
    assert!(matches!(err, DeltaError::Climatology(_)));
}

#[test]
fn matching_is_insensitive_to_year_coverage() {
    // Observations predate the reanalysis entirely; calendar-component
    // matching still pairs the January buckets.
    let observed = tabular(
        "time",
        vec![ts(2010, 1, 10), ts(2011, 1, 10)],
        vec![6.0, 8.0],
    );
    let reanalysis = tabular(
        "time",
        vec![ts(2020, 1, 10), ts(2021, 1, 10)],
        vec![1.0, 3.0],
    );

    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Observed),
    )
    .unwrap();

    // delta = 7 - 2 = 5
    assert_eq!(column_values(&corrected), &[6.0, 8.0]);
}

#[test]
fn buckets_missing_from_truth_are_left_unchanged() {
    let observed = tabular("time", vec![ts(2020, 1, 10)], vec![5.0]);
    let reanalysis = tabular(
        "time",
        vec![ts(2020, 1, 10), ts(2020, 3, 10)],
        vec![2.0, 9.0],
    );

    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Observed),
    )
    .unwrap();

    // January corrected by +3; March has no observed bucket
    assert_eq!(column_values(&corrected), &[5.0, 9.0]);
}

#[test]
fn representation_mismatch_is_rejected() {
    let observed = tabular("time", vec![ts(2020, 1, 10)], vec![5.0]);
    let data = ArrayD::from_shape_vec(vec![1], vec![2.0]).unwrap();
    let reanalysis = TimeSeries::Gridded(
        GriddedSeries::new(
            "precip",
            vec!["time".to_string()],
            data,
            "time",
            vec![ts(2020, 1, 10)],
        )
        .unwrap(),
    );

    let err = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Observed),
    )
    .unwrap_err();
    assert_eq!(
        err,
        DeltaError::RepresentationMismatch {
            observed: SeriesKind::Tabular,
            reanalysis: SeriesKind::Gridded,
        }
    );
}

#[test]
fn corrected_series_takes_the_truth_time_name() {
    let observed = tabular("time", vec![ts(2020, 1, 10)], vec![5.0]);
    let reanalysis = tabular("date", vec![ts(2020, 1, 10)], vec![2.0]);

    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Observed),
    )
    .unwrap();
    assert_eq!(corrected.time_name(), "time");
}

#[test]
fn gridded_absolute_correction() {
    let time = vec![ts(2020, 1, 5), ts(2020, 1, 20), ts(2020, 2, 5)];
    let observed_data =
        ArrayD::from_shape_vec(vec![3, 2], vec![4.0, 40.0, 8.0, 80.0, 10.0, 100.0]).unwrap();
    let reanalysis_data =
        ArrayD::from_shape_vec(vec![3, 2], vec![2.0, 20.0, 4.0, 40.0, 5.0, 50.0]).unwrap();
    let dims = vec!["time".to_string(), "site".to_string()];

    let observed = TimeSeries::Gridded(
        GriddedSeries::new("precip", dims.clone(), observed_data, "time", time.clone()).unwrap(),
    );
    let reanalysis = TimeSeries::Gridded(
        GriddedSeries::new("precip", dims, reanalysis_data, "time", time).unwrap(),
    );

    let corrected = compute_and_apply_deltas(
        &observed,
        &reanalysis,
        Frequency::Monthly,
        &DeltaConfig::new(DeltaType::Absolute, Preference::Observed),
    )
    .unwrap();

    let TimeSeries::Gridded(corrected) = corrected else {
        panic!("gridded series expected");
    };
    // January deltas per site: 6 - 3 = 3 and 60 - 30 = 30;
    // February: 10 - 5 = 5 and 100 - 50 = 50.
    let data = corrected.data();
    assert_relative_eq!(data[[0, 0]], 5.0, epsilon = 1e-12);
    assert_relative_eq!(data[[0, 1]], 50.0, epsilon = 1e-12);
    assert_relative_eq!(data[[1, 0]], 7.0, epsilon = 1e-12);
    assert_relative_eq!(data[[1, 1]], 70.0, epsilon = 1e-12);
    assert_relative_eq!(data[[2, 0]], 10.0, epsilon = 1e-12);
    assert_relative_eq!(data[[2, 1]], 100.0, epsilon = 1e-12);
}
