//! Owned country set loaded once per plugin session.

use crate::domain::{Country, CountryCode};
use std::collections::HashMap;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// The in-memory set of countries from the last successful fetch.
///
/// The catalog is replaced wholesale and never partially updated. Lookups go
/// through the three-letter country code, which is unique in the API's data.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
    by_code: HashMap<CountryCode, usize>,
    fetched_at: Option<i64>,
}

impl CountryCatalog {
    /// Creates an empty catalog. Nothing has been fetched yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole country set, stamping it with the current time.
    pub fn replace(&mut self, countries: Vec<Country>) {
        self.replace_at(countries, chrono::Utc::now().timestamp());
    }

    /// Replaces the whole country set with an explicit fetch timestamp.
    pub fn replace_at(&mut self, countries: Vec<Country>, fetched_at: i64) {
        let mut by_code = HashMap::with_capacity(countries.len());
        for (idx, country) in countries.iter().enumerate() {
            if by_code.insert(country.code.clone(), idx).is_some() {
                tracing::warn!(code = %country.code, "duplicate country code in response");
            }
        }

        tracing::debug!(count = countries.len(), fetched_at, "country catalog replaced");

        self.countries = countries;
        self.by_code = by_code;
        self.fetched_at = Some(fetched_at);
    }

    /// All countries in API order.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Looks up a country by its three-letter code.
    #[must_use]
    pub fn get(&self, code: &CountryCode) -> Option<&Country> {
        self.by_code.get(code).and_then(|&idx| self.countries.get(idx))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Unix timestamp of the last successful replacement, if any.
    #[must_use]
    pub const fn fetched_at(&self) -> Option<i64> {
        self.fetched_at
    }

    /// Human-readable age of the data relative to `now` (Unix seconds).
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    ///
    /// Returns `None` if nothing has been fetched.
    #[must_use]
    pub fn age_label(&self, now: i64) -> Option<String> {
        let diff = now - self.fetched_at?;

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}
