//! A Hebrew year, from one Rosh Hashannah to the next.

use std::ops::RangeInclusive;

use super::rosh_hashannah::{FIRST_YEAR, LAST_YEAR};
use super::{HEBREW_YEAR_OFFSET, HebrewMonth, HebrewYear, Heights, Quality, RoshHashannah};
use crate::date::GregorianDate;
use crate::error::{ConsistencyError, Error};

/// Hebrew years that can be computed: both of their Rosh Hashannahs must lie
/// in [`SUPPORTED_YEARS`](super::SUPPORTED_YEARS).
pub const SUPPORTED_HEBREW_YEARS: RangeInclusive<i32> =
    (FIRST_YEAR + HEBREW_YEAR_OFFSET)..=(LAST_YEAR + HEBREW_YEAR_OFFSET - 1);

/// A Hebrew year with its boundary heights.
///
/// # Example
///
/// ```
/// use luach::GregorianDate;
/// use luach::hebrew::{Annus, Quality};
///
/// let annus = Annus::new(5777).unwrap();
/// assert_eq!(GregorianDate::new(2016, 10, 3), annus.rosh_hashannah);
/// assert_eq!(Quality::Deficient, annus.year.quality());
/// assert_eq!((71, 70, 30), (annus.heights.he, annus.heights.she, annus.heights.it));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Annus {
    pub year: HebrewYear,
    pub heights: Heights,
    /// Date of 1 Tishrei.
    pub rosh_hashannah: GregorianDate,
}

impl Annus {
    /// Computes the Hebrew year `year`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HebrewYearOutOfRange`] outside
    /// [`SUPPORTED_HEBREW_YEARS`], and [`Error::Consistency`] if the two
    /// Rosh Hashannahs bounding the year do not fit together.
    pub fn new(year: i32) -> Result<Self, Error> {
        if !SUPPORTED_HEBREW_YEARS.contains(&year) {
            return Err(Error::HebrewYearOutOfRange {
                year,
                min: *SUPPORTED_HEBREW_YEARS.start(),
                max: *SUPPORTED_HEBREW_YEARS.end(),
            });
        }
        let first = RoshHashannah::new(year - HEBREW_YEAR_OFFSET)?;
        let second = RoshHashannah::new(year - HEBREW_YEAR_OFFSET + 1)?;
        Ok(Self::between(&first, &second)?)
    }

    /// Returns the Hebrew year containing `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use luach::GregorianDate;
    /// use luach::hebrew::Annus;
    ///
    /// let date = GregorianDate::new(2019, 9, 29);
    /// assert_eq!(5779, Annus::from_date(date).unwrap().year.year());
    /// ```
    pub fn from_date(date: GregorianDate) -> Result<Self, Error> {
        Self::governing(date).map(|(annus, _)| annus)
    }

    /// Returns the Hebrew year containing `date`, together with the month
    /// that August days pair with: Tishrei if `date` is on or after Rosh
    /// Hashannah of its Gregorian year, Elul before.
    pub(crate) fn governing(date: GregorianDate) -> Result<(Self, HebrewMonth), Error> {
        let rh = RoshHashannah::new(date.year())?;
        if date >= rh.date {
            let next = RoshHashannah::new(date.year() + 1)?;
            Ok((Self::between(&rh, &next)?, HebrewMonth::Tishrei))
        } else {
            let prev = RoshHashannah::new(date.year() - 1)?;
            Ok((Self::between(&prev, &rh)?, HebrewMonth::Elul))
        }
    }

    /// Combines the Rosh Hashannahs that open and close a Hebrew year.
    fn between(first: &RoshHashannah, second: &RoshHashannah) -> Result<Self, ConsistencyError> {
        if first.upcoming_year() != second.outgoing_year() || first.upcoming != second.outgoing {
            return Err(ConsistencyError::YearMismatch {
                year: first.year,
                upcoming_year: first.upcoming_year(),
                upcoming_leap: first.upcoming.is_leap(),
                outgoing_year: second.outgoing_year(),
                outgoing_leap: second.outgoing.is_leap(),
            });
        }
        let year = first.upcoming_year();
        let (he, she) = (first.heights.he, second.heights.she);
        let quality = Quality::from_value(she - he).ok_or(ConsistencyError::InvalidQuality {
            year,
            he,
            she,
            quality: she - he,
        })?;
        Ok(Self {
            year: HebrewYear::from_parts(year, first.upcoming, quality),
            heights: Heights {
                he,
                she,
                it: second.heights.it,
            },
            rosh_hashannah: first.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::YearType;

    #[test]
    fn qualities() {
        use Quality::*;
        let dataset = [
            (5776, true, Abundant, 385),
            (5777, false, Deficient, 353),
            (5778, false, Regular, 354),
            (5779, true, Abundant, 385),
            (5780, false, Abundant, 355),
            (5781, false, Deficient, 353),
            (5782, true, Regular, 384),
            (5784, true, Deficient, 383),
            (5786, false, Regular, 354),
        ];
        for (year, leap, quality, length) in dataset {
            let annus = Annus::new(year).unwrap();
            assert_eq!(leap, annus.year.is_leap(), "{year}");
            assert_eq!(quality, annus.year.quality(), "{year}");
            assert_eq!(length, annus.year.length(), "{year}");
        }
    }

    #[test]
    fn length_matches_rosh_hashannahs() {
        for year in 5770..5800 {
            let annus = Annus::new(year).unwrap();
            let next = Annus::new(year + 1).unwrap();
            assert_eq!(
                annus.year.length(),
                next.rosh_hashannah - annus.rosh_hashannah,
                "{year}"
            );
        }
    }

    #[test]
    fn heights_5780() {
        let annus = Annus::new(5780).unwrap();
        assert_eq!(
            Heights {
                he: 68,
                she: 69,
                it: 28
            },
            annus.heights
        );
        assert_eq!(GregorianDate::new(2019, 9, 30), annus.rosh_hashannah);
    }

    #[test]
    fn from_date_switches_at_rosh_hashannah() {
        let eve = GregorianDate::new(2019, 9, 29);
        let day = GregorianDate::new(2019, 9, 30);
        assert_eq!(5779, Annus::from_date(eve).unwrap().year.year());
        assert_eq!(5780, Annus::from_date(day).unwrap().year.year());
        assert_eq!(5780, Annus::from_date(GregorianDate::new(2020, 1, 1)).unwrap().year.year());
    }

    #[test]
    fn governing_august_partner() {
        let (_, august) = Annus::governing(GregorianDate::new(2019, 10, 1)).unwrap();
        assert_eq!(HebrewMonth::Tishrei, august);
        let (_, august) = Annus::governing(GregorianDate::new(2019, 8, 20)).unwrap();
        assert_eq!(HebrewMonth::Elul, august);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            Err(Error::HebrewYearOutOfRange {
                year: 5260,
                min: 5261,
                max: 5959
            }),
            Annus::new(5260)
        );
        assert!(Annus::new(5960).is_err());
        assert!(Annus::new(5261).is_ok());
        assert!(Annus::new(5959).is_ok());
    }

    #[test]
    fn inconsistent_year_length() {
        // the approximated molad of 1761 lands a day late
        assert!(matches!(
            Annus::new(5522),
            Err(Error::Consistency(ConsistencyError::InvalidQuality {
                year: 5522,
                quality: -2,
                ..
            }))
        ));
    }

    #[test]
    fn mismatched_leap_flags() {
        let first = RoshHashannah::new(2018).unwrap();
        let mut second = RoshHashannah::new(2019).unwrap();
        second.outgoing = YearType::Common;
        assert!(matches!(
            Annus::between(&first, &second),
            Err(ConsistencyError::YearMismatch {
                upcoming_year: 5779,
                upcoming_leap: true,
                outgoing_leap: false,
                ..
            })
        ));
    }

    #[test]
    fn mismatched_years() {
        let first = RoshHashannah::new(2018).unwrap();
        let second = RoshHashannah::new(2020).unwrap();
        assert!(matches!(
            Annus::between(&first, &second),
            Err(ConsistencyError::YearMismatch {
                upcoming_year: 5779,
                outgoing_year: 5780,
                ..
            })
        ));
    }
}
