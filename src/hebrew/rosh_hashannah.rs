//! Rosh Hashannah of a Gregorian year.
//!
//! The molad of Tishrei is approximated as a fractional September day from
//! the year's place in the 19-year cycle plus century corrections, then the
//! postponement rules move Rosh Hashannah off forbidden weekdays.

use std::ops::RangeInclusive;
#[cfg(feature = "cache")]
use std::sync::LazyLock;

#[cfg(feature = "cache")]
use dashmap::DashMap;
use tracing::{debug, trace};

use super::{HEBREW_YEAR_OFFSET, Heights};
use crate::date::{GregorianDate, YearType};
use crate::error::{ConsistencyError, Error, Marker};

/// First Gregorian year supported.
pub const FIRST_YEAR: i32 = 1500;
/// Last Gregorian year supported.
pub const LAST_YEAR: i32 = 2199;
/// Gregorian years whose Rosh Hashannah can be computed.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = FIRST_YEAR..=LAST_YEAR;

/// Earliest possible Rosh Hashannah (as a September day) from the first year
/// of each band on, latest band first. Grows by one for every Gregorian
/// century year that is not a leap year.
const CENTURY_BASE: [(i32, f64); 5] = [
    (2100, 7.0),
    (1900, 6.0),
    (1800, 5.0),
    (1700, 4.0),
    (1500, 3.0),
];

/// Molad remainder beyond which a Tuesday Rosh Hashannah of a common year
/// moves to Thursday.
const TUESDAY_THRESHOLD: f64 = 0.633;
/// Molad remainder beyond which a Monday Rosh Hashannah following a leap year
/// moves to Tuesday.
const MONDAY_THRESHOLD: f64 = 0.898;

const IT_RANGE: RangeInclusive<i32> = 12..=44;
const HE_RANGE: RangeInclusive<i32> = 41..=73;
const SHE_RANGE: RangeInclusive<i32> = 41..=73;
/// The one `(year, SHE)` pair allowed outside `SHE_RANGE`.
const SHE_EXCEPTION: (i32, i32) = (2196, 74);

#[cfg(feature = "cache")]
static CACHE: LazyLock<DashMap<i32, RoshHashannah>> = LazyLock::new(DashMap::new);

/// Rosh Hashannah of a Gregorian year, with the boundary heights it
/// determines.
///
/// The Gregorian year `year` contains the end of the *outgoing* Hebrew year
/// `year + 3760` and the start of the *upcoming* Hebrew year `year + 3761`.
///
/// `heights.he` belongs to the upcoming year while `heights.she` and
/// `heights.it` belong to the outgoing one; [`Annus`](super::Annus) combines
/// two consecutive results into the triple of a single Hebrew year.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoshHashannah {
    /// Gregorian year.
    pub year: i32,
    /// Date of Rosh Hashannah, 1 Tishrei of the upcoming year.
    pub date: GregorianDate,
    pub heights: Heights,
    /// Leap flag of the Hebrew year ending at `date`.
    pub outgoing: YearType,
    /// Leap flag of the Hebrew year starting at `date`.
    pub upcoming: YearType,
    /// Leap flag of the Gregorian year.
    pub gregorian: YearType,
    /// Approximate molad of Tishrei, in days from the end of August.
    pub molad: f64,
}

/// Computes Rosh Hashannah of the Gregorian year `year`.
///
/// Shorthand for [`RoshHashannah::new`].
pub fn rosh_hashannah(year: i32) -> Result<RoshHashannah, Error> {
    RoshHashannah::new(year)
}

impl RoshHashannah {
    /// Computes Rosh Hashannah of the Gregorian year `year`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside [`SUPPORTED_YEARS`], and
    /// [`Error::Consistency`] if a boundary height breaks its bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use luach::GregorianDate;
    /// use luach::hebrew::RoshHashannah;
    ///
    /// let rh = RoshHashannah::new(2019).unwrap();
    /// assert_eq!(GregorianDate::new(2019, 9, 30), rh.date);
    /// assert_eq!(5780, rh.upcoming_year());
    /// ```
    pub fn new(year: i32) -> Result<Self, Error> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(Error::OutOfRange {
                year,
                min: FIRST_YEAR,
                max: LAST_YEAR,
            });
        }
        memoized(year)
    }

    /// The Hebrew year ending at this Rosh Hashannah.
    pub fn outgoing_year(&self) -> i32 {
        self.year + HEBREW_YEAR_OFFSET - 1
    }

    /// The Hebrew year starting at this Rosh Hashannah.
    pub fn upcoming_year(&self) -> i32 {
        self.year + HEBREW_YEAR_OFFSET
    }

    fn compute(year: i32) -> Result<Self, Error> {
        let golden = (12 * (year.rem_euclid(19) + 1)) % 19;
        let upcoming = if golden <= 6 {
            YearType::Leap
        } else {
            YearType::Common
        };
        let outgoing = if (12..=18).contains(&golden) {
            YearType::Leap
        } else {
            YearType::Common
        };
        let gregorian = YearType::from_gregorian(year);

        let b = century_base(year)? + f64::from(year.rem_euclid(4)) / 4.0;
        let f = f64::from(golden);
        let a = 1.5 * f;
        let c = f + 1.0;
        let d = (2.0 * f64::from(year - 1900) - 1.0) / 35.0;
        let e = (f + 1.0) / 760.0;
        let molad = a + b + (c - d - e) / 18.0;

        let day = molad.trunc() as i32;
        let remainder = molad - f64::from(day);
        trace!(year, molad, day, "provisional Rosh Hashannah");

        let postponement = match GregorianDate::new(year, 9, day).day_of_week() {
            // Sunday, Wednesday, Friday
            7 | 3 | 5 => 1,
            // Tuesday
            2 if !upcoming.is_leap() && remainder > TUESDAY_THRESHOLD => 2,
            // Monday
            1 if outgoing.is_leap() && remainder > MONDAY_THRESHOLD => 1,
            _ => 0,
        };
        if postponement > 0 {
            debug!(year, day, postponement, "postponed Rosh Hashannah");
        }
        let day = day + postponement;

        let it = day + 9;
        let mut she = it + 10;
        if gregorian.is_leap() {
            she += 1;
        }
        if !outgoing.is_leap() {
            she += 30;
        }

        let rh = Self {
            year,
            date: GregorianDate::new(year, 9, day),
            heights: Heights {
                he: it + 29,
                she,
                it,
            },
            outgoing,
            upcoming,
            gregorian,
            molad,
        };
        rh.validate()?;
        Ok(rh)
    }

    fn validate(&self) -> Result<(), ConsistencyError> {
        let Heights { he, she, it } = self.heights;
        check(self.year, Marker::It, it, IT_RANGE)?;
        check(self.year, Marker::He, he, HE_RANGE)?;
        if (self.year, she) == SHE_EXCEPTION {
            debug!(year = self.year, she, "allowing documented SHE exception");
        } else {
            check(self.year, Marker::She, she, SHE_RANGE)?;
        }
        if it >= he || it >= she {
            return Err(ConsistencyError::MarkerOrder {
                year: self.year,
                it,
                he,
                she,
            });
        }
        Ok(())
    }
}

#[cfg(feature = "cache")]
fn memoized(year: i32) -> Result<RoshHashannah, Error> {
    if let Some(hit) = CACHE.get(&year) {
        return Ok(*hit);
    }
    let rh = RoshHashannah::compute(year)?;
    CACHE.insert(year, rh);
    Ok(rh)
}

#[cfg(not(feature = "cache"))]
fn memoized(year: i32) -> Result<RoshHashannah, Error> {
    RoshHashannah::compute(year)
}

fn century_base(year: i32) -> Result<f64, Error> {
    CENTURY_BASE
        .iter()
        .find(|&&(start, _)| year >= start)
        .map(|&(_, base)| base)
        .ok_or(Error::OutOfRange {
            year,
            min: FIRST_YEAR,
            max: LAST_YEAR,
        })
}

fn check(
    year: i32,
    marker: Marker,
    value: i32,
    range: RangeInclusive<i32>,
) -> Result<(), ConsistencyError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConsistencyError::MarkerOutOfRange {
            year,
            marker,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
