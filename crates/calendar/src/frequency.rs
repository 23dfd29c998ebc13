//! Time-frequency enum and abbreviation mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Time frequency over which a series is bucketed.
///
/// The five supported frequencies map onto a fixed set of short
/// abbreviations (`Y`, `S`, `M`, `D`, `H`) used for calendar-step
/// computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One bucket covering the whole series.
    Yearly,
    /// One bucket covering the months of a [`SeasonSpec`](crate::SeasonSpec).
    Seasonal,
    /// One bucket per distinct month present.
    Monthly,
    /// One bucket per distinct (month, day) pair present.
    Daily,
    /// One bucket per distinct (month, day, hour) triple present.
    Hourly,
}

impl Frequency {
    /// All supported frequencies, in coarse-to-fine order.
    pub const ALL: [Frequency; 5] = [
        Frequency::Yearly,
        Frequency::Seasonal,
        Frequency::Monthly,
        Frequency::Daily,
        Frequency::Hourly,
    ];

    /// Returns the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Frequency::Yearly => "yearly",
            Frequency::Seasonal => "seasonal",
            Frequency::Monthly => "monthly",
            Frequency::Daily => "daily",
            Frequency::Hourly => "hourly",
        }
    }

    /// Returns the short calendar-step abbreviation.
    pub fn abbr(self) -> &'static str {
        match self {
            Frequency::Yearly => "Y",
            Frequency::Seasonal => "S",
            Frequency::Monthly => "M",
            Frequency::Daily => "D",
            Frequency::Hourly => "H",
        }
    }

    /// Returns the synthetic label name used when standard dates are not
    /// kept, or `None` for yearly output (which always keeps real dates).
    pub fn ordinal_label(self) -> Option<&'static str> {
        match self {
            Frequency::Yearly => None,
            Frequency::Seasonal => Some("season"),
            Frequency::Monthly => Some("month_of_year"),
            Frequency::Daily => Some("day_of_year"),
            Frequency::Hourly => Some("hour_of_year"),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frequency {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yearly" => Ok(Frequency::Yearly),
            "seasonal" => Ok(Frequency::Seasonal),
            "monthly" => Ok(Frequency::Monthly),
            "daily" => Ok(Frequency::Daily),
            "hourly" => Ok(Frequency::Hourly),
            other => Err(CalendarError::UnsupportedFrequency {
                given: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip() {
        for freq in Frequency::ALL {
            let parsed: Frequency = freq.name().parse().unwrap();
            assert_eq!(parsed, freq);
        }
    }

    #[test]
    fn abbreviations() {
        assert_eq!(Frequency::Yearly.abbr(), "Y");
        assert_eq!(Frequency::Seasonal.abbr(), "S");
        assert_eq!(Frequency::Monthly.abbr(), "M");
        assert_eq!(Frequency::Daily.abbr(), "D");
        assert_eq!(Frequency::Hourly.abbr(), "H");
    }

    #[test]
    fn ordinal_labels() {
        assert_eq!(Frequency::Hourly.ordinal_label(), Some("hour_of_year"));
        assert_eq!(Frequency::Daily.ordinal_label(), Some("day_of_year"));
        assert_eq!(Frequency::Monthly.ordinal_label(), Some("month_of_year"));
        assert_eq!(Frequency::Seasonal.ordinal_label(), Some("season"));
        assert_eq!(Frequency::Yearly.ordinal_label(), None);
    }

    #[test]
    fn parse_unsupported() {
        let err = "weekly".parse::<Frequency>().unwrap_err();
        assert_eq!(
            err,
            CalendarError::UnsupportedFrequency {
                given: "weekly".to_string()
            }
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        // Identifiers are the lowercase canonical set; anything else is
        // rejected with the allowed options named.
        assert!("Monthly".parse::<Frequency>().is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Frequency::Seasonal.to_string(), "seasonal");
    }
}
