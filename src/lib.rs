//! Conversion between Gregorian and Hebrew calendar dates.
//!
//! Dates are converted with John Conway's method, which locates each
//! Gregorian day on a "height" scale shared with its partner Hebrew month.
//! Only the arithmetic needed for Rosh Hashannah is performed, so conversion
//! is cheap, but the approximation restricts the supported range to Rosh
//! Hashannahs from 1500 to 2199.
//!
//! # Examples
//!
//! Basic usage with [`GregorianDate`]:
//!
//! ```
//! use luach::GregorianDate;
//!
//! let date = GregorianDate::new(2000, 1, 1);
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Hebrew calendar:
//!
//! ```
//! use luach::{GregorianDate, HebrewDate, HebrewMonth::*};
//!
//! let date = GregorianDate::new(2016, 12, 25);
//! let hebrew = luach::to_hebrew_date(date).unwrap();
//!
//! assert_eq!(HebrewDate::new(5777, Kislev, 25), hebrew);
//! assert_eq!("25 Kislev 5777", hebrew.to_string());
//! assert_eq!(Ok(date), luach::from_hebrew_date(hebrew));
//! ```
//!
//! Rosh Hashannah and the year it opens:
//!
//! ```
//! use luach::{GregorianDate, Quality};
//! use luach::hebrew::Annus;
//!
//! let rh = luach::rosh_hashannah(2019).unwrap();
//! assert_eq!(GregorianDate::new(2019, 9, 30), rh.date);
//!
//! let annus = Annus::new(5780).unwrap();
//! assert_eq!(Quality::Abundant, annus.year.quality());
//! assert_eq!(355, annus.year.length());
//! ```
//!
//! # Features
//!
//! - `cache` (default): memoize Rosh Hashannah per Gregorian year in a
//!   concurrent map shared by all threads.

pub mod date;
pub mod error;
pub mod hebrew;

pub use date::{GregorianDate, YearType};
pub use error::{ConsistencyError, Error, Marker};
pub use hebrew::{
    HebrewDate, HebrewMonth, HebrewYear, Quality, from_hebrew_date, rosh_hashannah,
    to_hebrew_date,
};
