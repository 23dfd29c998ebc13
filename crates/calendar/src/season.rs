//! Validated ordered month triple for seasonal statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::month::{MONTH_LETTERS, check_month};

/// An ordered triple of month numbers defining a season.
///
/// Order is significant: the last month anchors the season's
/// end-of-period date. A season may wrap the year boundary, as in
/// December–January–February (`[12, 1, 2]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 3]", into = "[u8; 3]")]
pub struct SeasonSpec {
    months: [u8; 3],
}

impl SeasonSpec {
    /// Creates a new `SeasonSpec` from exactly three month numbers.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if any entry is outside 1..=12.
    pub fn new(months: [u8; 3]) -> Result<Self, CalendarError> {
        for &m in &months {
            check_month(m)?;
        }
        Ok(Self { months })
    }

    /// Creates a `SeasonSpec` from a slice, checking the arity.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::SeasonLength`] if the slice does not hold
    /// exactly 3 entries, or [`CalendarError::InvalidMonth`] if any entry
    /// is outside 1..=12.
    pub fn from_slice(months: &[u8]) -> Result<Self, CalendarError> {
        let arr: [u8; 3] = months
            .try_into()
            .map_err(|_| CalendarError::SeasonLength { got: months.len() })?;
        Self::new(arr)
    }

    /// Returns the season's months in order.
    pub fn months(self) -> [u8; 3] {
        self.months
    }

    /// Returns the final month, which anchors the season's end date.
    pub fn end_month(self) -> u8 {
        self.months[2]
    }

    /// Returns true if `month` belongs to this season.
    pub fn contains(self, month: u8) -> bool {
        self.months.contains(&month)
    }

    /// Builds the season acronym from the month-letter table,
    /// e.g. `[12, 1, 2]` → `"DJF"`.
    pub fn acronym(self) -> String {
        self.months
            .iter()
            .map(|&m| MONTH_LETTERS[usize::from(m) - 1])
            .collect()
    }
}

impl TryFrom<[u8; 3]> for SeasonSpec {
    type Error = CalendarError;

    fn try_from(months: [u8; 3]) -> Result<Self, Self::Error> {
        Self::new(months)
    }
}

impl From<SeasonSpec> for [u8; 3] {
    fn from(spec: SeasonSpec) -> Self {
        spec.months
    }
}

impl fmt::Display for SeasonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.acronym())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let djf = SeasonSpec::new([12, 1, 2]).unwrap();
        assert_eq!(djf.months(), [12, 1, 2]);
        assert_eq!(djf.end_month(), 2);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            SeasonSpec::new([12, 13, 2]).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn from_slice_wrong_arity() {
        assert_eq!(
            SeasonSpec::from_slice(&[12, 1]).unwrap_err(),
            CalendarError::SeasonLength { got: 2 }
        );
        assert_eq!(
            SeasonSpec::from_slice(&[12, 1, 2, 3]).unwrap_err(),
            CalendarError::SeasonLength { got: 4 }
        );
    }

    #[test]
    fn from_slice_valid() {
        let jja = SeasonSpec::from_slice(&[6, 7, 8]).unwrap();
        assert_eq!(jja.months(), [6, 7, 8]);
    }

    #[test]
    fn contains_wrapping_season() {
        let djf = SeasonSpec::new([12, 1, 2]).unwrap();
        assert!(djf.contains(12));
        assert!(djf.contains(1));
        assert!(djf.contains(2));
        assert!(!djf.contains(3));
    }

    #[test]
    fn acronyms() {
        assert_eq!(SeasonSpec::new([12, 1, 2]).unwrap().acronym(), "DJF");
        assert_eq!(SeasonSpec::new([6, 7, 8]).unwrap().acronym(), "JJA");
        assert_eq!(SeasonSpec::new([9, 10, 11]).unwrap().acronym(), "SON");
    }

    #[test]
    fn display_is_acronym() {
        assert_eq!(SeasonSpec::new([3, 4, 5]).unwrap().to_string(), "MAM");
    }
}
