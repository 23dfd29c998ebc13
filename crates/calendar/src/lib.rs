//! # helios-calendar
//!
//! Calendar primitives for periodic climatology statistics on the
//! Gregorian calendar.
//!
//! ## Quick Start
//!
//! ```
//! use helios_calendar::{Frequency, SeasonSpec, representative_year};
//!
//! // Time frequencies and their abbreviations
//! let freq: Frequency = "monthly".parse().unwrap();
//! assert_eq!(freq.abbr(), "M");
//!
//! // Seasons are ordered month triples; the last month anchors the season end
//! let djf = SeasonSpec::new([12, 1, 2]).unwrap();
//! assert_eq!(djf.acronym(), "DJF");
//!
//! // The representative year is the latest leap year, else the latest year
//! assert_eq!(representative_year(&[2019, 2020, 2021, 2022]), Some(2020));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `frequency` | Time-frequency enum and abbreviation mapping |
//! | `season` | Validated ordered month triple for seasonal statistics |
//! | `month` | Month name/letter tables and month-length arithmetic |
//! | `year` | Representative-year resolution |
//! | `error` | Error types |

mod error;
mod frequency;
mod month;
mod season;
mod year;

pub use error::CalendarError;
pub use frequency::Frequency;
pub use month::{MONTH_LETTERS, MONTH_NAMES, days_in_month, is_leap_year, month_letter, month_name};
pub use season::SeasonSpec;
pub use year::representative_year;
