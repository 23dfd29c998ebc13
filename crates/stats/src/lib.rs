//! Statistical helper functions for periodic climatology statistics.
//!
//! The [`Statistic`] enum is the closed set of named reductions a bucket
//! can be collapsed with; the free functions are the underlying slice
//! reductions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error type for the helios-stats crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Returned when a statistic name is not one of the supported set.
    #[error("unsupported statistic '{given}' (options are max, min, mean, std, sum)")]
    UnsupportedStatistic {
        /// The statistic name that was given.
        given: String,
    },
}

/// A named reduction applied to every bucket of a climatology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    /// Largest value.
    Max,
    /// Smallest value.
    Min,
    /// Arithmetic mean.
    Mean,
    /// Sample standard deviation (N-1 denominator).
    Std,
    /// Sum of all values.
    Sum,
}

impl Statistic {
    /// All supported statistics.
    pub const ALL: [Statistic; 5] = [
        Statistic::Max,
        Statistic::Min,
        Statistic::Mean,
        Statistic::Std,
        Statistic::Sum,
    ];

    /// Returns the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Statistic::Max => "max",
            Statistic::Min => "min",
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Sum => "sum",
        }
    }

    /// Reduces a slice to a single value.
    ///
    /// Returns 0.0 for an empty slice; callers skip empty buckets before
    /// reduction, so this is a convention rather than a reachable case in
    /// the climatology pipeline.
    pub fn apply(self, data: &[f64]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        match self {
            Statistic::Max => data.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Statistic::Min => data.iter().copied().fold(f64::INFINITY, f64::min),
            Statistic::Mean => mean(data),
            Statistic::Std => sd(data),
            Statistic::Sum => data.iter().sum(),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" => Ok(Statistic::Max),
            "min" => Ok(Statistic::Min),
            "mean" => Ok(Statistic::Mean),
            "std" => Ok(Statistic::Std),
            "sum" => Ok(Statistic::Sum),
            other => Err(StatsError::UnsupportedStatistic {
                given: other.to_string(),
            }),
        }
    }
}

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching pandas' `std()` default).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Lengths of consecutive `true` and `false` runs in a mask.
///
/// Returns `(true_runs, false_runs)` in order of appearance.
pub fn run_lengths(mask: &[bool]) -> (Vec<usize>, Vec<usize>) {
    let mut true_runs = Vec::new();
    let mut false_runs = Vec::new();

    let mut iter = mask.iter().copied();
    let Some(first) = iter.next() else {
        return (true_runs, false_runs);
    };

    let mut current = first;
    let mut length = 1usize;
    for value in iter {
        if value == current {
            length += 1;
        } else {
            if current {
                true_runs.push(length);
            } else {
                false_runs.push(length);
            }
            current = value;
            length = 1;
        }
    }
    if current {
        true_runs.push(length);
    } else {
        false_runs.push(length);
    }

    (true_runs, false_runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn statistic_apply_max_min() {
        let data = [3.0, -1.0, 7.5, 2.0];
        assert_eq!(Statistic::Max.apply(&data), 7.5);
        assert_eq!(Statistic::Min.apply(&data), -1.0);
    }

    #[test]
    fn statistic_apply_mean_sum() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(Statistic::Mean.apply(&data), 2.5, epsilon = 1e-12);
        assert_relative_eq!(Statistic::Sum.apply(&data), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn statistic_apply_std() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(Statistic::Std.apply(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn statistic_apply_empty() {
        for stat in Statistic::ALL {
            assert_eq!(stat.apply(&[]), 0.0);
        }
    }

    #[test]
    fn statistic_parse_round_trip() {
        for stat in Statistic::ALL {
            let parsed: Statistic = stat.name().parse().unwrap();
            assert_eq!(parsed, stat);
        }
    }

    #[test]
    fn statistic_parse_unsupported() {
        let err = "median".parse::<Statistic>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported statistic 'median' (options are max, min, mean, std, sum)"
        );
    }

    #[test]
    fn test_run_lengths() {
        // Pattern: true(2), false(3), true(1)
        let mask = [true, true, false, false, false, true];
        let (t, f) = run_lengths(&mask);
        assert_eq!(t, vec![2, 1]);
        assert_eq!(f, vec![3]);
    }

    #[test]
    fn test_run_lengths_uniform() {
        let (t, f) = run_lengths(&[true, true, true]);
        assert_eq!(t, vec![3]);
        assert!(f.is_empty());
    }

    #[test]
    fn test_run_lengths_empty() {
        let (t, f) = run_lengths(&[]);
        assert!(t.is_empty());
        assert!(f.is_empty());
    }
}
