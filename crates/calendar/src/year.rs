//! Representative-year resolution.

use crate::month::is_leap_year;

/// Picks the representative year used to assign real calendar dates to
/// climatology labels.
///
/// The representative year is the latest leap year among `years`, or the
/// latest year overall if none is a leap year. Choosing a leap year when
/// one exists guarantees that a February 29 bucket can always be labeled
/// with a real date. Returns `None` for an empty slice.
pub fn representative_year(years: &[i32]) -> Option<i32> {
    years
        .iter()
        .copied()
        .filter(|&y| is_leap_year(y))
        .max()
        .or_else(|| years.iter().copied().max())
}
