//! Country domain model.
//!
//! This module defines the [`Country`] record as delivered by the REST Countries
//! API (`/v3.1/all`) together with the substring matching used by the search bar.
//! Records are read-only once decoded; the plugin never mutates or re-serializes
//! them.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// Translation key used for the localized card name.
pub const LOCALIZED_TRANSLATION: &str = "por";

/// Three-letter ISO 3166-1 alpha-3 code (`cca3`).
///
/// This is the identity key for countries throughout the plugin. Display names
/// are not unique across translations and are never used as keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Names block of a country record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryName {
    /// Common English name, used as the display name.
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// One entry of the `translations` map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
    /// Empty when the entry only carries an official name.
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Flags {
    /// URL of the SVG flag image.
    #[serde(default)]
    pub svg: String,
    /// Alternative text describing the flag.
    #[serde(default)]
    pub alt: String,
}

/// A single country as returned by the countries API.
///
/// Only `name` and `cca3` are required. Fields the API omits for some
/// territories (capital, subregion, flag alt text) decode to empty values, and
/// `languages`/`borders` stay `None` when absent.
///
/// # Examples
///
/// ```
/// use countrydex::domain::Country;
///
/// let country: Country = serde_json::from_str(r#"{
///     "name": { "common": "Germany" },
///     "translations": { "por": { "common": "Alemanha" } },
///     "flags": { "svg": "https://flagcdn.com/de.svg", "alt": "Black, red and gold" },
///     "capital": ["Berlin"],
///     "region": "Europe",
///     "subregion": "Western Europe",
///     "population": 83240525,
///     "cca3": "DEU"
/// }"#).unwrap();
///
/// assert_eq!(country.localized_name(), "Alemanha");
/// assert!(country.matches("Berl"));
/// assert!(!country.matches("berlin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub translations: BTreeMap<String, Translation>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default, deserialize_with = "one_or_many")]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(rename = "cca3")]
    pub code: CountryCode,
}

impl Country {
    /// Display name shown on the card.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.name.common
    }

    /// Portuguese common name, falling back to the display name when the
    /// translation is missing.
    #[must_use]
    pub fn localized_name(&self) -> &str {
        self.translations
            .get(LOCALIZED_TRANSLATION)
            .map(|t| t.common.as_str())
            .filter(|common| !common.is_empty())
            .unwrap_or(self.display_name())
    }

    /// Returns `true` if `term` is a substring of the display name, any
    /// capital, the region, or the subregion.
    ///
    /// Matching is case-sensitive and unnormalized. The empty term matches
    /// every country.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        self.name.common.contains(term)
            || self.capital.iter().any(|capital| capital.contains(term))
            || self.region.contains(term)
            || self.subregion.contains(term)
    }

    /// Character ranges `(start, end)` of every occurrence of `term` in the
    /// display name, for highlighting. Empty for an empty term.
    #[must_use]
    pub fn name_match_ranges(&self, term: &str) -> Vec<(usize, usize)> {
        if term.is_empty() {
            return vec![];
        }

        let term_chars = term.chars().count();
        self.name
            .common
            .match_indices(term)
            .map(|(byte_idx, _)| {
                let start = self.name.common[..byte_idx].chars().count();
                (start, start + term_chars)
            })
            .collect()
    }

    /// Population with thousands separators (`83,240,525`).
    #[must_use]
    pub fn population_label(&self) -> String {
        let digits = self.population.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

/// The API has shipped `capital` both as a string and as an array of strings.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
        None => vec![],
    })
}

#[cfg(test)]
pub(crate) fn fixture(code: &str, name: &str, capital: &str, region: &str, subregion: &str) -> Country {
    Country {
        name: CountryName {
            common: name.to_string(),
            official: String::new(),
        },
        translations: BTreeMap::new(),
        flags: Flags {
            svg: format!("https://flagcdn.com/{}.svg", code.to_lowercase()),
            alt: format!("The flag of {name}"),
        },
        capital: if capital.is_empty() { vec![] } else { vec![capital.to_string()] },
        region: region.to_string(),
        subregion: subregion.to_string(),
        population: 1_000,
        languages: None,
        borders: None,
        code: CountryCode::from(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_capital_as_string_or_array() {
        let single: Country = serde_json::from_str(
            r#"{"name":{"common":"Peru"},"capital":"Lima","cca3":"PER"}"#,
        )
        .unwrap();
        assert_eq!(single.capital, vec!["Lima"]);

        let many: Country = serde_json::from_str(
            r#"{"name":{"common":"South Africa"},"capital":["Pretoria","Bloemfontein","Cape Town"],"cca3":"ZAF"}"#,
        )
        .unwrap();
        assert_eq!(many.capital.len(), 3);
        assert!(many.matches("Bloem"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let antarctica: Country = serde_json::from_str(
            r#"{"name":{"common":"Antarctica"},"region":"Antarctic","population":1000,"cca3":"ATA"}"#,
        )
        .unwrap();

        assert!(antarctica.capital.is_empty());
        assert!(antarctica.subregion.is_empty());
        assert!(antarctica.languages.is_none());
        assert!(antarctica.borders.is_none());
        assert_eq!(antarctica.localized_name(), "Antarctica");
    }

    #[test]
    fn translation_without_common_name_falls_back() {
        let country: Country = serde_json::from_str(
            r#"{"name":{"common":"Aruba"},"translations":{"por":{"official":"Aruba"},"xyz":{"official":"B"}},"cca3":"ABW"}"#,
        )
        .unwrap();

        assert!(country.translations["xyz"].common.is_empty());
        assert_eq!(country.localized_name(), "Aruba");
    }

    #[test]
    fn missing_code_is_rejected() {
        let result = serde_json::from_str::<Country>(r#"{"name":{"common":"Nowhere"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn matching_covers_four_fields_case_sensitively() {
        let japan = fixture("JPN", "Japan", "Tokyo", "Asia", "Eastern Asia");

        assert!(japan.matches(""));
        assert!(japan.matches("Jap"));
        assert!(japan.matches("oky"));
        assert!(japan.matches("Asia"));
        assert!(japan.matches("Eastern"));
        assert!(!japan.matches("japan"));
        assert!(!japan.matches("JPN"));
    }

    #[test]
    fn name_match_ranges_use_char_indices() {
        let country = fixture("CIV", "Côte d'Ivoire", "Yamoussoukro", "Africa", "Western Africa");

        assert_eq!(country.name_match_ranges("te"), vec![(2, 4)]);
        assert_eq!(country.name_match_ranges("e"), vec![(3, 4), (12, 13)]);
        assert!(country.name_match_ranges("").is_empty());
    }

    #[test]
    fn population_label_groups_thousands() {
        let mut country = fixture("DEU", "Germany", "Berlin", "Europe", "Western Europe");
        country.population = 83_240_525;
        assert_eq!(country.population_label(), "83,240,525");

        country.population = 999;
        assert_eq!(country.population_label(), "999");
    }
}
