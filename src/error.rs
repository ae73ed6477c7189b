//! Error types.

use std::fmt;

use crate::date::GregorianDate;
use crate::hebrew::HebrewMonth;

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The Gregorian year lies outside [`SUPPORTED_YEARS`](crate::hebrew::SUPPORTED_YEARS).
    #[error("Gregorian year {year} is outside the supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },

    /// The Hebrew year lies outside
    /// [`SUPPORTED_HEBREW_YEARS`](crate::hebrew::SUPPORTED_HEBREW_YEARS).
    #[error("Hebrew year {year} is outside the supported range {min}..={max}")]
    HebrewYearOutOfRange { year: i32, min: i32, max: i32 },

    /// A computed value broke one of the calendar's invariants.
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    /// A Gregorian month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: i32 },

    /// A Hebrew month name that matches none of the known months.
    #[error("unknown Hebrew month: {name:?}")]
    UnknownMonth { name: String },

    /// A Gregorian day outside the length of its month.
    #[error("invalid day: {day} for month {month} of {year} (max {max})")]
    InvalidDay {
        year: i32,
        month: i32,
        day: i32,
        max: i32,
    },

    /// A Gregorian date before Julian day number 0 or after `i32::MAX`.
    #[error("date {year}-{month}-{day} is outside the representable range")]
    DateOutOfRange { year: i32, month: i32, day: i32 },

    /// A Hebrew day outside the length of its month in that year.
    #[error("invalid day: {day} for {month} {year} (max {max})")]
    InvalidHebrewDay {
        year: i32,
        month: HebrewMonth,
        day: i32,
        max: i32,
    },

    /// Adar in a leap year, or Adar I/Adar II in a common year.
    #[error("{month} does not occur in Hebrew year {year}")]
    MonthNotInYear { year: i32, month: HebrewMonth },
}

/// An internal defect: the algorithm produced a value it should never
/// produce for an in-range input.
///
/// Each variant carries the offending computed fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("{marker} = {value} for Gregorian year {year} (must be {min}..={max})")]
    MarkerOutOfRange {
        year: i32,
        marker: Marker,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("IT = {it} does not precede HE = {he} and SHE = {she} for Gregorian year {year}")]
    MarkerOrder { year: i32, it: i32, he: i32, she: i32 },

    /// Rosh Hashannah of two consecutive Gregorian years disagree about the
    /// Hebrew year between them.
    #[error(
        "Hebrew year {upcoming_year} (leap: {upcoming_leap}) after Rosh Hashannah {year} \
         does not match {outgoing_year} (leap: {outgoing_leap}) before Rosh Hashannah {}",
        .year + 1
    )]
    YearMismatch {
        year: i32,
        upcoming_year: i32,
        upcoming_leap: bool,
        outgoing_year: i32,
        outgoing_leap: bool,
    },

    #[error("Hebrew year {year} has quality {quality} (SHE {she} - HE {he}), expected -1..=1")]
    InvalidQuality {
        year: i32,
        he: i32,
        she: i32,
        quality: i32,
    },

    #[error("no Hebrew month boundary found below {date}")]
    StretchExhausted { date: GregorianDate },

    #[error("day {day} overflows {month} {year} across a half-year boundary")]
    MonthOverflow {
        year: i32,
        month: HebrewMonth,
        day: i32,
    },
}

/// One of the three boundary heights of a Hebrew year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Marker {
    /// Tishrei and Marcheshvan.
    He,
    /// Tevet through Adar II.
    She,
    /// Nissan through Elul.
    It,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Marker::He => "HE",
            Marker::She => "SHE",
            Marker::It => "IT",
        })
    }
}
