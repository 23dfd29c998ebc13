//! Delta-correction configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use helios_calendar::SeasonSpec;
use helios_stats::Statistic;

use crate::error::DeltaError;

/// How a per-bucket delta is formed and broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaType {
    /// Additive: delta = truth − other, applied by addition.
    Absolute,
    /// Multiplicative: delta = truth ÷ other, applied by multiplication.
    Relative,
}

impl DeltaType {
    /// Returns the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            DeltaType::Absolute => "absolute",
            DeltaType::Relative => "relative",
        }
    }
}

impl fmt::Display for DeltaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeltaType {
    type Err = DeltaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absolute" => Ok(DeltaType::Absolute),
            "relative" => Ok(DeltaType::Relative),
            other => Err(DeltaError::UnsupportedDeltaType {
                given: other.to_string(),
            }),
        }
    }
}

/// Which input series acts as the truth side of the delta.
///
/// The other series is the correction target: deltas pull it toward the
/// preferred one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Observations are the truth; the reanalysis series is corrected.
    Observed,
    /// The reanalysis is the truth; the observed series is corrected.
    Reanalysis,
}

impl Preference {
    /// Returns the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Preference::Observed => "observed",
            Preference::Reanalysis => "reanalysis",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preference {
    type Err = DeltaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "observed" => Ok(Preference::Observed),
            "reanalysis" => Ok(Preference::Reanalysis),
            other => Err(DeltaError::UnsupportedPreference {
                given: other.to_string(),
            }),
        }
    }
}

/// Options controlling delta computation and application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaConfig {
    delta_type: DeltaType,
    preference: Preference,
    statistic: Statistic,
    season: Option<SeasonSpec>,
}

impl DeltaConfig {
    /// Creates a configuration with the mean statistic and no season.
    pub fn new(delta_type: DeltaType, preference: Preference) -> Self {
        Self {
            delta_type,
            preference,
            statistic: Statistic::Mean,
            season: None,
        }
    }

    /// Sets the statistic both climatologies are reduced with. Defaults
    /// to [`Statistic::Mean`].
    pub fn with_statistic(mut self, statistic: Statistic) -> Self {
        self.statistic = statistic;
        self
    }

    /// Sets the season for seasonal frequency. Required there, ignored
    /// everywhere else.
    pub fn with_season(mut self, season: SeasonSpec) -> Self {
        self.season = Some(season);
        self
    }

    /// Returns the delta type.
    pub fn delta_type(&self) -> DeltaType {
        self.delta_type
    }

    /// Returns the preference.
    pub fn preference(&self) -> Preference {
        self.preference
    }

    /// Returns the bucket statistic.
    pub fn statistic(&self) -> Statistic {
        self.statistic
    }

    /// Returns the configured season, if any.
    pub fn season(&self) -> Option<SeasonSpec> {
        self.season
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_type_round_trip() {
        for kind in [DeltaType::Absolute, DeltaType::Relative] {
            let parsed: DeltaType = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn delta_type_unsupported() {
        let err = "additive".parse::<DeltaType>().unwrap_err();
        assert_eq!(
            err,
            DeltaError::UnsupportedDeltaType {
                given: "additive".to_string()
            }
        );
    }

    #[test]
    fn preference_round_trip() {
        for pref in [Preference::Observed, Preference::Reanalysis] {
            let parsed: Preference = pref.name().parse().unwrap();
            assert_eq!(parsed, pref);
        }
    }

    #[test]
    fn preference_unsupported() {
        let err = "truth".parse::<Preference>().unwrap_err();
        assert_eq!(
            err,
            DeltaError::UnsupportedPreference {
                given: "truth".to_string()
            }
        );
    }

    #[test]
    fn config_defaults() {
        let config = DeltaConfig::new(DeltaType::Absolute, Preference::Observed);
        assert_eq!(config.statistic(), Statistic::Mean);
        assert_eq!(config.season(), None);
    }
}
