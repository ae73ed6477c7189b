//! Month names.

use super::HebrewMonth;
use crate::error::Error;

/// Returns the transliterated name of a month.
///
/// # Example
///
/// ```
/// use luach::hebrew::{self, HebrewMonth::*};
///
/// assert_eq!("Marcheshvan", hebrew::fmt::month(Marcheshvan));
/// assert_eq!("Adar I", hebrew::fmt::month(AdarI));
/// ```
pub fn month(m: HebrewMonth) -> &'static str {
    use HebrewMonth::*;
    match m {
        Nissan => "Nissan",
        Iyar => "Iyar",
        Sivan => "Sivan",
        Tamuz => "Tamuz",
        Av => "Av",
        Elul => "Elul",
        Tishrei => "Tishrei",
        Marcheshvan => "Marcheshvan",
        Kislev => "Kislev",
        Tevet => "Tevet",
        Shevat => "Shevat",
        Adar => "Adar",
        AdarI => "Adar I",
        AdarII => "Adar II",
    }
}

/// Parses a month name.
///
/// Case, spaces, underscores and hyphens are ignored, so `Adar I`,
/// `adar_i` and `ADAR-I` are the same month. A few common alternative
/// transliterations are accepted as well.
///
/// # Example
///
/// ```
/// use luach::hebrew::{self, HebrewMonth::*};
///
/// assert_eq!(Ok(AdarII), hebrew::fmt::parse_month("Adar_II"));
/// assert_eq!(Ok(Marcheshvan), hebrew::fmt::parse_month("Cheshvan"));
/// assert!(hebrew::fmt::parse_month("Thermidor").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnknownMonth`] if the name matches no month.
pub fn parse_month(name: &str) -> Result<HebrewMonth, Error> {
    use HebrewMonth::*;
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    Ok(match key.as_str() {
        "nissan" | "nisan" => Nissan,
        "iyar" | "iyyar" => Iyar,
        "sivan" => Sivan,
        "tamuz" | "tammuz" => Tamuz,
        "av" => Av,
        "elul" => Elul,
        "tishrei" | "tishri" => Tishrei,
        "marcheshvan" | "cheshvan" | "heshvan" => Marcheshvan,
        "kislev" => Kislev,
        "tevet" => Tevet,
        "shevat" | "shvat" => Shevat,
        "adar" => Adar,
        "adari" | "adar1" => AdarI,
        "adarii" | "adar2" => AdarII,
        _ => {
            return Err(Error::UnknownMonth {
                name: name.to_owned(),
            });
        }
    })
}
