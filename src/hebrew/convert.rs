//! Conversion between Gregorian and Hebrew dates.

use tracing::{instrument, trace};

use super::{Annus, HebrewDate, HebrewMonth};
use crate::date::{GregorianDate, YearType, days_in_month, height, previous_month};
use crate::error::{ConsistencyError, Error};

/// Upper bound on backward month steps while locating the partner month.
const MAX_STRETCH: usize = 12;

/// Converts a Gregorian date to the Hebrew calendar.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if a Rosh Hashannah bracketing `date` falls
/// outside [`SUPPORTED_YEARS`](super::SUPPORTED_YEARS), and
/// [`Error::Consistency`] if the year containing `date` cannot be computed
/// consistently.
///
/// # Example
///
/// ```
/// use luach::GregorianDate;
/// use luach::hebrew::{self, HebrewDate, HebrewMonth::*};
///
/// let date = GregorianDate::new(2016, 12, 25);
/// assert_eq!(Ok(HebrewDate::new(5777, Kislev, 25)), hebrew::to_hebrew_date(date));
/// ```
#[instrument(level = "trace")]
pub fn to_hebrew_date(date: GregorianDate) -> Result<HebrewDate, Error> {
    let (annus, august) = Annus::governing(date)?;
    let year = annus.year;

    let (mut civil_year, mut civil_month) = (date.year(), date.month());
    let mut days = date.day();
    let mut month = partner_of(civil_month, year.is_leap(), august)?;
    let mut steps = 0;
    while annus.heights.boundary(month) >= height(days, civil_month) {
        if steps == MAX_STRETCH {
            return Err(ConsistencyError::StretchExhausted { date }.into());
        }
        (civil_year, civil_month) = previous_month(civil_year, civil_month);
        days += days_in_month(YearType::from_gregorian(civil_year), civil_month);
        month = partner_of(civil_month, year.is_leap(), august)?;
        steps += 1;
    }
    if steps > 0 {
        trace!(steps, %month, "stretched to partner month");
    }

    let mut day = height(days, civil_month) - annus.heights.boundary(month);
    loop {
        let length = year.month_length(month)?;
        if day <= length {
            break;
        }
        day -= length;
        month = year
            .next_month(month)
            .ok_or(ConsistencyError::MonthOverflow {
                year: year.year(),
                month,
                day,
            })?;
    }
    Ok(HebrewDate::new(year.year(), month, day))
}

/// Converts a Hebrew date to the Gregorian calendar.
///
/// # Errors
///
/// Returns [`Error::HebrewYearOutOfRange`] outside
/// [`SUPPORTED_HEBREW_YEARS`](super::SUPPORTED_HEBREW_YEARS),
/// [`Error::MonthNotInYear`] for Adar in a leap year or Adar I/II in a
/// common year, [`Error::InvalidHebrewDay`] if the day does not exist in the
/// month, and [`Error::Consistency`] if the year cannot be computed
/// consistently.
///
/// # Example
///
/// ```
/// use luach::GregorianDate;
/// use luach::hebrew::{self, HebrewDate, HebrewMonth::*};
///
/// let date = HebrewDate::new(5779, Iyar, 7);
/// assert_eq!(Ok(GregorianDate::new(2019, 5, 12)), hebrew::from_hebrew_date(date));
/// ```
#[instrument(level = "trace")]
pub fn from_hebrew_date(date: HebrewDate) -> Result<GregorianDate, Error> {
    let annus = Annus::new(date.year())?;
    let (year, month, day) = (annus.year, date.month(), date.day());
    let max = year.month_length(month)?;
    if !(1..=max).contains(&day) {
        return Err(Error::InvalidHebrewDay {
            year: year.year(),
            month,
            day,
            max,
        });
    }

    let height = day + annus.heights.boundary(month);
    let ordinal = month.height_ordinal();
    let mut civil_year = annus.rosh_hashannah.year();
    if month.in_following_civil_year() {
        civil_year += 1;
    }
    let civil_month = if ordinal > 12 { ordinal - 12 } else { ordinal };
    Ok(GregorianDate::new(civil_year, civil_month, height - ordinal))
}

/// Hebrew month sharing the height scale of Gregorian `month`.
///
/// `august` decides between Tishrei and Elul.
fn partner_of(month: i32, leap: bool, august: HebrewMonth) -> Result<HebrewMonth, Error> {
    use HebrewMonth::*;
    Ok(match month {
        1 if leap => AdarI,
        2 if leap => AdarII,
        1 | 2 => Adar,
        3 => Nissan,
        4 => Iyar,
        5 => Sivan,
        6 => Tamuz,
        7 => Av,
        8 => august,
        9 => Marcheshvan,
        10 => Kislev,
        11 => Tevet,
        12 => Shevat,
        _ => return Err(Error::InvalidMonth { month }),
    })
}
