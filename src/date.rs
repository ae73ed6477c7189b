//! Proleptic Gregorian civil dates.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::Error;

/// English month names, January first.
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

const MONTH_LENGTHS: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in 400 Gregorian years.
const DAYS_PER_CYCLE: i64 = 146097;

/// A date in the proleptic Gregorian calendar.
///
/// Only civil `(year, month, day)` components are held; there is no
/// time-of-day. A `GregorianDate` is always normalized, i.e. the day is
/// valid for its month. Dates are ordered by year, then month, then day.
///
/// Supported range is [`GregorianDate::MIN`] (November 24, 4714 BC, Julian
/// day number 0) through [`GregorianDate::MAX`] (Julian day number
/// `i32::MAX`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GregorianDate {
    year: i32,
    month: i32,
    day: i32,
    jdn: i32,
}

impl GregorianDate {
    /// Earliest representable date, Julian day number 0.
    pub const MIN: GregorianDate = GregorianDate {
        year: -4713,
        month: 11,
        day: 24,
        jdn: 0,
    };

    /// Latest representable date, Julian day number `i32::MAX`.
    pub const MAX: GregorianDate = GregorianDate {
        year: 5874898,
        month: 6,
        day: 3,
        jdn: i32::MAX,
    };

    /// Creates a date, normalizing out-of-range components.
    ///
    /// Months past December roll into the following year and days past the
    /// end of the month roll into the following months; zero or negative
    /// components roll backwards in the same way. Results outside
    /// [`MIN`](Self::MIN)..=[`MAX`](Self::MAX) saturate to the nearer end;
    /// use [`checked_new`](Self::checked_new) to detect that.
    ///
    /// # Example
    ///
    /// ```
    /// use luach::GregorianDate;
    ///
    /// let date = GregorianDate::new(2019, 9, 33);
    /// assert_eq!((2019, 10, 3), date.ymd());
    /// assert_eq!(GregorianDate::MIN, GregorianDate::new(-4800, 3, 1));
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        let jdn = normalized_jdn(year, month, day);
        if jdn < 0 {
            Self::MIN
        } else {
            i32::try_from(jdn)
                .ok()
                .and_then(Self::from_jdn)
                .unwrap_or(Self::MAX)
        }
    }

    /// Creates a date, normalizing out-of-range components like
    /// [`new`](Self::new) but rejecting results outside the supported range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateOutOfRange`] if the normalized date falls before
    /// [`MIN`](Self::MIN) or after [`MAX`](Self::MAX).
    pub fn checked_new(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        i32::try_from(normalized_jdn(year, month, day))
            .ok()
            .and_then(Self::from_jdn)
            .ok_or(Error::DateOutOfRange { year, month, day })
    }

    /// Creates a date, rejecting out-of-range components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMonth`] if `month` is outside `1..=12`,
    /// [`Error::InvalidDay`] if `day` does not exist in that month, and
    /// [`Error::DateOutOfRange`] if the date is not representable.
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        let max = days_in_month(YearType::from_gregorian(year), month);
        if !(1..=max).contains(&day) {
            return Err(Error::InvalidDay {
                year,
                month,
                day,
                max,
            });
        }
        Self::checked_new(year, month, day)
    }

    /// Creates a date from a Julian day number (JDN).
    ///
    /// Returns `None` for negative day numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use luach::GregorianDate;
    ///
    /// let date = GregorianDate::from_jdn(2451545).unwrap();
    /// assert_eq!((2000, 1, 1), date.ymd());
    /// assert_eq!(None, GregorianDate::from_jdn(-1));
    /// ```
    pub fn from_jdn(jdn: i32) -> Option<Self> {
        if jdn < 0 {
            return None;
        }
        let j = i64::from(jdn);
        let f = j + 1401 + (((4 * j + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Some(Self {
            year: i32::try_from(year).ok()?,
            month: i32::try_from(month).ok()?,
            day: i32::try_from(day).ok()?,
            jdn,
        })
    }

    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (`1..=12`).
    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    /// Returns `(year, month, day)`.
    pub fn ymd(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// Returns whether the date's year is a Gregorian leap year.
    pub fn year_type(&self) -> YearType {
        YearType::from_gregorian(self.year)
    }

    /// Returns the number of days in the date's month.
    pub fn days_in_month(&self) -> i32 {
        days_in_month(self.year_type(), self.month)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use luach::GregorianDate;
    ///
    /// let date = GregorianDate::new(2000, 1, 1);
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        self.jdn.rem_euclid(7) + 1
    }

    /// Returns the height of the date, see [`height`].
    pub fn height(&self) -> i32 {
        height(self.day, self.month)
    }

    /// Adds `days`, returning `None` if the result is not representable.
    pub fn checked_add(self, days: i32) -> Option<Self> {
        self.jdn.checked_add(days).and_then(Self::from_jdn)
    }
}

/// Julian day number of a possibly unnormalized date.
///
/// Works in `i64` so that no `i32` input overflows. Years are first shifted
/// by whole 400-year cycles to where the day-number formula holds.
fn normalized_jdn(year: i32, month: i32, day: i32) -> i64 {
    let (month, day) = (i64::from(month), i64::from(day));
    let y = i64::from(year) + (month - 1).div_euclid(12);
    let m = (month - 1).rem_euclid(12) + 1;
    let cycles = (y + 4799).div_euclid(400).min(0);
    let y = y - 400 * cycles;
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + day
        - 32075
        + DAYS_PER_CYCLE * cycles
}

/// Adds days, saturating at [`GregorianDate::MIN`] and
/// [`GregorianDate::MAX`]; see [`GregorianDate::checked_add`].
impl Add<i32> for GregorianDate {
    type Output = GregorianDate;
    fn add(self, rhs: i32) -> Self::Output {
        match self.jdn.checked_add(rhs) {
            Some(jdn) => GregorianDate::from_jdn(jdn).unwrap_or(GregorianDate::MIN),
            None => GregorianDate::MAX,
        }
    }
}
impl Sub<GregorianDate> for GregorianDate {
    type Output = i32;
    fn sub(self, rhs: GregorianDate) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Formats as e.g. `24 February 1968`.
impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = usize::try_from(self.month - 1)
            .ok()
            .and_then(|i| MONTH_NAMES.get(i))
            .ok_or(fmt::Error)?;
        write!(f, "{} {} {}", self.day, name, self.year)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Returns the Conway "height" of a day in a month: `day + month`, plus 12
/// for January and February so that they count after December.
///
/// The height orders the days of a September-anchored year, whatever the
/// year.
///
/// # Example
///
/// ```
/// use luach::date::height;
///
/// assert_eq!(21, height(18, 3)); // 18 March
/// assert_eq!(31, height(18, 1)); // 18 January
/// ```
pub fn height(day: i32, month: i32) -> i32 {
    let h = day + month;
    if month <= 2 { h + 12 } else { h }
}

/// Number of days in `month` (`1..=12`) of a year of the given type.
pub(crate) fn days_in_month(year_type: YearType, month: i32) -> i32 {
    let base = MONTH_LENGTHS[(month - 1) as usize];
    if month == 2 && year_type.is_leap() {
        base + 1
    } else {
        base
    }
}

/// Returns the `(year, month)` preceding the given one.
pub(crate) fn previous_month(year: i32, month: i32) -> (i32, i32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdn_round_trip() {
        let date = GregorianDate::from_jdn(2440588).unwrap();
        assert_eq!((1970, 1, 1), date.ymd());
        assert_eq!(2440588, date.jdn());
        let date = GregorianDate::new(2021, 9, 8);
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn to_day_of_week() {
        assert_eq!(4, GregorianDate::new(1970, 1, 1).day_of_week());
        assert_eq!(3, GregorianDate::new(2021, 9, 8).day_of_week());
        assert_eq!(1, GregorianDate::new(2019, 9, 30).day_of_week());
        assert_eq!(2, GregorianDate::new(1500, 9, 4).day_of_week());
    }

    #[test]
    fn normalize_days() {
        for ((y, m, d), expected) in [
            ((2019, 9, 33), (2019, 10, 3)),
            ((2016, 10, 86), (2016, 12, 25)),
            ((2016, 12, 32), (2017, 1, 1)),
            ((2020, 2, 30), (2020, 3, 1)),
            ((2019, 2, 29), (2019, 3, 1)),
            ((2019, 3, 0), (2019, 2, 28)),
            ((2020, 1, -30), (2019, 12, 1)),
        ] {
            assert_eq!(expected, GregorianDate::new(y, m, d).ymd(), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn normalize_months() {
        assert_eq!((2020, 1, 1), GregorianDate::new(2019, 13, 1).ymd());
        assert_eq!((2018, 12, 1), GregorianDate::new(2019, 0, 1).ymd());
        assert_eq!((2021, 2, 1), GregorianDate::new(2019, 26, 1).ymd());
    }

    #[test]
    fn try_new_rejects() {
        assert_eq!(
            GregorianDate::try_new(2019, 13, 1),
            Err(Error::InvalidMonth { month: 13 })
        );
        assert_eq!(
            GregorianDate::try_new(2100, 2, 29),
            Err(Error::InvalidDay {
                year: 2100,
                month: 2,
                day: 29,
                max: 28
            })
        );
        assert_eq!(
            GregorianDate::try_new(2000, 2, 29).map(|d| d.ymd()),
            Ok((2000, 2, 29))
        );
    }

    #[test]
    fn range_edges() {
        assert_eq!((-4713, 11, 24), GregorianDate::from_jdn(0).unwrap().ymd());
        assert_eq!(GregorianDate::MIN, GregorianDate::from_jdn(0).unwrap());
        assert_eq!(GregorianDate::MAX, GregorianDate::from_jdn(i32::MAX).unwrap());
        assert_eq!(0, GregorianDate::new(-4713, 11, 24).jdn());
        assert_eq!(GregorianDate::MAX, GregorianDate::new(5874898, 6, 3));
        assert_eq!(None, GregorianDate::from_jdn(-1));
        assert_eq!(
            Err(Error::DateOutOfRange {
                year: -4713,
                month: 11,
                day: 23
            }),
            GregorianDate::checked_new(-4713, 11, 23)
        );
        assert!(GregorianDate::checked_new(5874898, 6, 4).is_err());
        assert_eq!(
            Err(Error::DateOutOfRange {
                year: -4713,
                month: 11,
                day: 23
            }),
            GregorianDate::try_new(-4713, 11, 23)
        );
    }

    #[test]
    fn saturating_constructors() {
        assert_eq!(GregorianDate::MIN, GregorianDate::new(-4800, 3, 1));
        assert_eq!(GregorianDate::MIN, GregorianDate::new(i32::MIN, i32::MIN, i32::MIN));
        assert_eq!(GregorianDate::MAX, GregorianDate::new(2019, 9, i32::MAX));
        assert_eq!(GregorianDate::MIN, GregorianDate::new(2019, i32::MIN, 1));
        assert_eq!(GregorianDate::MAX, GregorianDate::new(i32::MAX, i32::MAX, i32::MAX));
        assert!(GregorianDate::checked_new(2019, 9, i32::MAX).is_err());
        assert!(GregorianDate::checked_new(2019, i32::MIN, 1).is_err());
    }

    #[test]
    fn normalize_across_cycles() {
        // 2000 years back and forth across the start of the day count
        let date = GregorianDate::new(-4713, 11, 24 + 146097 * 5);
        assert_eq!((-2713, 11, 24), date.ymd());
        assert_eq!(
            GregorianDate::new(-6713, 11, 24 + 146097 * 10).ymd(),
            date.ymd()
        );
        assert_eq!((2020, 3, 1), GregorianDate::new(2020, -24 * 12 + 3, 8767).ymd());
    }

    #[test]
    fn saturating_arithmetic() {
        assert_eq!(GregorianDate::MIN, GregorianDate::MIN + -1);
        assert_eq!(GregorianDate::MAX, GregorianDate::MAX + 1);
        assert_eq!(None, GregorianDate::MAX.checked_add(1));
        assert_eq!(None, GregorianDate::new(2000, 1, 1).checked_add(i32::MIN));
        assert_eq!(
            Some((2000, 1, 2)),
            GregorianDate::new(2000, 1, 1).checked_add(1).map(|d| d.ymd())
        );
        assert_eq!(i32::MAX, GregorianDate::MAX - GregorianDate::MIN);
    }

    #[test]
    fn heights() {
        for (m, h) in (1..=12).zip([31, 32, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30]) {
            assert_eq!(h, height(18, m), "18/{m}");
        }
        assert_eq!(21, GregorianDate::new(2019, 3, 18).height());
        assert_eq!(21, GregorianDate::new(0, 3, 18).height());
    }

    #[test]
    fn year_types() {
        use YearType::*;
        assert_eq!(Leap, YearType::from_gregorian(2000));
        assert_eq!(Common, YearType::from_gregorian(1900));
        assert_eq!(Leap, YearType::from_gregorian(2016));
        assert_eq!(Common, YearType::from_gregorian(2019));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(29, GregorianDate::new(2020, 2, 1).days_in_month());
        assert_eq!(28, GregorianDate::new(1900, 2, 1).days_in_month());
        assert_eq!(30, GregorianDate::new(2019, 9, 1).days_in_month());
        assert_eq!(31, GregorianDate::new(2019, 12, 1).days_in_month());
    }

    #[test]
    fn arithmetic() {
        let date = GregorianDate::new(2019, 12, 31);
        assert_eq!((2020, 1, 1), (date + 1).ymd());
        assert_eq!(366, GregorianDate::new(2021, 1, 1) - GregorianDate::new(2020, 1, 1));
    }

    #[test]
    fn ordering() {
        assert!(GregorianDate::new(2019, 9, 30) < GregorianDate::new(2019, 10, 1));
        assert!(GregorianDate::new(2018, 12, 31) < GregorianDate::new(2019, 1, 1));
    }

    #[test]
    fn format() {
        assert_eq!("24 February 1968", GregorianDate::new(1968, 2, 24).to_string());
        assert_eq!("30 September 2019", GregorianDate::new(2019, 9, 30).to_string());
    }
}
