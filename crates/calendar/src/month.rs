//! Month name/letter tables and month-length arithmetic.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Full month names, indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// First letter of each month name, used to build season acronyms
/// such as "DJF" or "JJA".
pub const MONTH_LETTERS: [char; 12] = ['J', 'F', 'M', 'A', 'M', 'J', 'J', 'A', 'S', 'O', 'N', 'D'];

/// Returns the full name of a month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_name(month: u8) -> Result<&'static str, CalendarError> {
    check_month(month)?;
    Ok(MONTH_NAMES[usize::from(month) - 1])
}

/// Returns the first letter of a month's name.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_letter(month: u8) -> Result<char, CalendarError> {
    check_month(month)?;
    Ok(MONTH_LETTERS[usize::from(month) - 1])
}

/// Returns true if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    check_month(month)?;
    let days = match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };
    Ok(days)
}

pub(crate) fn check_month(month: u8) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}
