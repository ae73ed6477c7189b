//! Hebrew calendar
//!
//! Dates are converted with Conway's "Mickey Mouse" method: every Hebrew year
//! is described by three boundary heights, HE, SHE and IT, which relate the
//! [height](crate::date::height) of a Gregorian date to the day of its partner
//! Hebrew month. The boundaries follow from the date of Rosh Hashannah in
//! consecutive Gregorian years, see [`RoshHashannah`] and [`Annus`].
//!
//! # Example
//!
//! ```
//! use luach::GregorianDate;
//! use luach::hebrew::{self, HebrewDate, HebrewMonth::*};
//!
//! let date = GregorianDate::new(2019, 9, 30);
//! assert_eq!(Ok(HebrewDate::new(5780, Tishrei, 1)), hebrew::to_hebrew_date(date));
//! ```

use std::str::FromStr;

use crate::date::YearType;
use crate::error::Error;

pub mod annus;
mod convert;
pub mod fmt;
pub mod rosh_hashannah;

pub use annus::{Annus, SUPPORTED_HEBREW_YEARS};
pub use convert::{from_hebrew_date, to_hebrew_date};
pub use rosh_hashannah::{RoshHashannah, SUPPORTED_YEARS, rosh_hashannah};

/// Difference between a Gregorian year and the Hebrew year beginning at its
/// Rosh Hashannah.
pub const HEBREW_YEAR_OFFSET: i32 = 3761;

/// Month of the Hebrew calendar.
///
/// A common year has `Adar`; a leap year has `AdarI` and `AdarII` instead.
/// Declaration order carries no meaning, arithmetic goes through
/// [`HebrewMonth::height_ordinal`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HebrewMonth {
    Nissan,
    Iyar,
    Sivan,
    Tamuz,
    Av,
    Elul,
    Tishrei,
    Marcheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarI,
    AdarII,
}

impl HebrewMonth {
    /// Every month, from Nissan.
    pub const ALL: [HebrewMonth; 14] = [
        Self::Nissan,
        Self::Iyar,
        Self::Sivan,
        Self::Tamuz,
        Self::Av,
        Self::Elul,
        Self::Tishrei,
        Self::Marcheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::Adar,
        Self::AdarI,
        Self::AdarII,
    ];

    /// Number of the Gregorian month whose height scale the month shares,
    /// counting January and February as 13 and 14.
    ///
    /// Elul and Tishrei both pair with August, Adar and Adar I with January.
    pub fn height_ordinal(self) -> i32 {
        use HebrewMonth::*;
        match self {
            Nissan => 3,
            Iyar => 4,
            Sivan => 5,
            Tamuz => 6,
            Av => 7,
            Elul | Tishrei => 8,
            Marcheshvan => 9,
            Kislev => 10,
            Tevet => 11,
            Shevat => 12,
            Adar | AdarI => 13,
            AdarII => 14,
        }
    }

    /// `true` for months falling in the Gregorian year after the one in which
    /// their Hebrew year began.
    pub(crate) fn in_following_civil_year(self) -> bool {
        use HebrewMonth::*;
        !matches!(self, Tishrei | Marcheshvan | Kislev | Tevet | Shevat)
    }

    /// Returns the name of the month, e.g. `Adar II`.
    pub fn name(self) -> &'static str {
        fmt::month(self)
    }
}

impl std::fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HebrewMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fmt::parse_month(s)
    }
}

/// Length class of a Hebrew year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Quality {
    /// Marcheshvan and Kislev both have 29 days.
    Deficient,
    /// Marcheshvan has 29 days, Kislev 30.
    Regular,
    /// Marcheshvan and Kislev both have 30 days.
    Abundant,
}

impl Quality {
    /// Maps `-1`, `0`, `1` to deficient, regular, abundant.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            -1 => Some(Self::Deficient),
            0 => Some(Self::Regular),
            1 => Some(Self::Abundant),
            _ => None,
        }
    }

    pub fn value(self) -> i32 {
        match self {
            Self::Deficient => -1,
            Self::Regular => 0,
            Self::Abundant => 1,
        }
    }
}

/// A Hebrew year with its leap flag and [`Quality`].
///
/// Obtained from [`HebrewYear::new`] or [`Annus`]; the quality is always
/// derived from the calendar, never chosen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HebrewYear {
    year: i32,
    year_type: YearType,
    quality: Quality,
}

impl HebrewYear {
    /// Computes the Hebrew year `year`.
    ///
    /// # Errors
    ///
    /// Fails if `year` is outside [`SUPPORTED_HEBREW_YEARS`] or its
    /// computation is inconsistent.
    ///
    /// # Example
    ///
    /// ```
    /// use luach::hebrew::{HebrewYear, Quality};
    ///
    /// let year = HebrewYear::new(5779).unwrap();
    /// assert!(year.is_leap());
    /// assert_eq!(Quality::Abundant, year.quality());
    /// assert_eq!(385, year.length());
    /// ```
    pub fn new(year: i32) -> Result<Self, Error> {
        Annus::new(year).map(|annus| annus.year)
    }

    pub(crate) fn from_parts(year: i32, year_type: YearType, quality: Quality) -> Self {
        Self {
            year,
            year_type,
            quality,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn year_type(&self) -> YearType {
        self.year_type
    }

    /// `true` if the year has thirteen months.
    pub fn is_leap(&self) -> bool {
        self.year_type.is_leap()
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Number of days in the year: 353, 354 or 355, plus 30 in a leap year.
    pub fn length(&self) -> i32 {
        let days = 354 + self.quality.value();
        if self.is_leap() { days + 30 } else { days }
    }

    /// Number of days in `month` of this year.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MonthNotInYear`] for Adar in a leap year and for
    /// Adar I or Adar II in a common year.
    pub fn month_length(&self, month: HebrewMonth) -> Result<i32, Error> {
        use HebrewMonth::*;
        if !self.contains(month) {
            return Err(Error::MonthNotInYear {
                year: self.year,
                month,
            });
        }
        Ok(match month {
            Nissan | Sivan | Av | Tishrei | Shevat | AdarI => 30,
            Iyar | Tamuz | Elul | Tevet | AdarII | Adar => 29,
            Marcheshvan if self.quality == Quality::Abundant => 30,
            Marcheshvan => 29,
            Kislev if self.quality == Quality::Deficient => 29,
            Kislev => 30,
        })
    }

    /// `true` unless `month` is Adar in a leap year or Adar I/II in a common
    /// year.
    pub fn contains(&self, month: HebrewMonth) -> bool {
        use HebrewMonth::*;
        match month {
            Adar => !self.is_leap(),
            AdarI | AdarII => self.is_leap(),
            _ => true,
        }
    }

    /// Months of the year in order, from Tishrei to Elul.
    pub fn months(&self) -> impl Iterator<Item = HebrewMonth> {
        use HebrewMonth::*;
        let this = *self;
        [
            Tishrei,
            Marcheshvan,
            Kislev,
            Tevet,
            Shevat,
            Adar,
            AdarI,
            AdarII,
            Nissan,
            Iyar,
            Sivan,
            Tamuz,
            Av,
            Elul,
        ]
        .into_iter()
        .filter(move |&m| this.contains(m))
    }

    /// Month following `month` within the same half of the year.
    ///
    /// Returns `None` at the end of Adar (Adar II) and Elul.
    pub(crate) fn next_month(&self, month: HebrewMonth) -> Option<HebrewMonth> {
        use HebrewMonth::*;
        Some(match month {
            Tishrei => Marcheshvan,
            Marcheshvan => Kislev,
            Kislev => Tevet,
            Tevet => Shevat,
            Shevat if self.is_leap() => AdarI,
            Shevat => Adar,
            AdarI => AdarII,
            Nissan => Iyar,
            Iyar => Sivan,
            Sivan => Tamuz,
            Tamuz => Av,
            Av => Elul,
            Adar | AdarII | Elul => return None,
        })
    }
}

impl std::fmt::Display for HebrewYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.year)
    }
}

/// A date in the Hebrew calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: i32,
}

impl HebrewDate {
    /// Creates a Hebrew date; the components are validated on conversion.
    pub fn new(year: i32, month: HebrewMonth, day: i32) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }
}

/// Formats as e.g. `25 Shevat 5278`.
impl std::fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// The three boundary heights of a Hebrew year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Heights {
    /// Boundary of Tishrei and Marcheshvan.
    pub he: i32,
    /// Boundary of Tevet, Shevat and the Adars.
    pub she: i32,
    /// Boundary of Nissan through Elul.
    pub it: i32,
}

impl Heights {
    /// Boundary height of `month`: the height of a day of that month minus
    /// its day number.
    ///
    /// Kislev takes the greater of HE and SHE.
    pub fn boundary(&self, month: HebrewMonth) -> i32 {
        use HebrewMonth::*;
        match month {
            Tishrei | Marcheshvan => self.he,
            Kislev => self.he.max(self.she),
            Tevet | Shevat | Adar | AdarI | AdarII => self.she,
            Nissan | Iyar | Sivan | Tamuz | Av | Elul => self.it,
        }
    }
}
