//! Locales and the locale compatibility rule.
//!
//! A locale is a language plus an optional country. Two locales are
//! *compatible* when they are equal, or when at least one of them carries no
//! country and their languages match. The relation is symmetric but not
//! transitive (`en_GB ~ en ~ en_US`, yet `en_GB` and `en_US` are not
//! compatible), so it is always evaluated per pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConceptError;

// ── Locale ────────────────────────────────────────────────────

/// Language (ISO-639, lower-case) with an optional country (ISO-3166,
/// upper-case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// Build a locale from a language code alone.
    pub fn new(language: &str) -> Self {
        Self {
            language: language.trim().to_ascii_lowercase(),
            country: None,
        }
    }

    /// Build a locale from a language and a country. An empty country is the
    /// same as no country.
    pub fn with_country(language: &str, country: &str) -> Self {
        let country = country.trim();
        Self {
            language: language.trim().to_ascii_lowercase(),
            country: (!country.is_empty()).then(|| country.to_ascii_uppercase()),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn has_country(&self) -> bool {
        self.country.is_some()
    }

    /// Language code truncated to its two-letter form. Over-long codes are
    /// accepted and compared on this key instead of being rejected.
    pub fn language_key(&self) -> &str {
        match self.language.char_indices().nth(2) {
            Some((idx, _)) => &self.language[..idx],
            None => &self.language,
        }
    }

    /// The same language with the country dropped.
    pub fn language_only(&self) -> Locale {
        Self {
            language: self.language.clone(),
            country: None,
        }
    }

    pub fn is_compatible_with(&self, other: &Locale) -> bool {
        are_compatible(self, other)
    }

    // Common locales used by defaults and tests
    pub fn english() -> Self {
        Self::new("en")
    }

    pub fn uk() -> Self {
        Self::with_country("en", "GB")
    }

    pub fn us() -> Self {
        Self::with_country("en", "US")
    }
}

/// Decide whether two locales are compatible: equal, or same language where
/// at least one side has no country.
pub fn are_compatible(a: &Locale, b: &Locale) -> bool {
    if a == b {
        return true;
    }
    if a.has_country() && b.has_country() {
        return false;
    }
    a.language_key() == b.language_key()
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => write!(f, "{}", self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = ConceptError;

    /// Parses `en`, `en_GB`, `en-GB` and `en_gb`. Anything after the country
    /// segment (variants, scripts) is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(['_', '-']);
        let language = parts.next().unwrap_or_default();

        if language.is_empty() {
            return Err(ConceptError::invalid_locale(s, "missing language"));
        }
        if !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConceptError::invalid_locale(
                s,
                "language must be alphabetic",
            ));
        }

        match parts.next() {
            Some(country) if !country.chars().all(|c| c.is_ascii_alphanumeric()) => Err(
                ConceptError::invalid_locale(s, "country must be alphanumeric"),
            ),
            Some(country) => Ok(Self::with_country(language, country)),
            None => Ok(Self::new(language)),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = ConceptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

// ── Ambient locale ────────────────────────────────────────────

/// Supplies the caller's current locale when a resolution call is made
/// without an explicit one.
pub trait LocaleSource: Send + Sync {
    fn current_locale(&self) -> Locale;
}

/// A locale source that always answers with the same locale.
#[derive(Debug, Clone)]
pub struct FixedLocaleSource(pub Locale);

impl LocaleSource for FixedLocaleSource {
    fn current_locale(&self) -> Locale {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language_only() {
        let l: Locale = "EN".parse().unwrap();
        assert_eq!(l.language(), "en");
        assert_eq!(l.country(), None);
        assert_eq!(l.to_string(), "en");
    }

    #[test]
    fn parse_with_country_separators() {
        assert_eq!("en_GB".parse::<Locale>().unwrap(), Locale::uk());
        assert_eq!("en-gb".parse::<Locale>().unwrap(), Locale::uk());
        assert_eq!("en_".parse::<Locale>().unwrap(), Locale::english());
    }

    #[test]
    fn parse_rejects_missing_language() {
        assert!(matches!(
            "_GB".parse::<Locale>(),
            Err(ConceptError::InvalidLocale { .. })
        ));
        assert!("".parse::<Locale>().is_err());
        assert!("e1".parse::<Locale>().is_err());
    }

    #[test]
    fn exact_locales_are_compatible() {
        assert!(are_compatible(&Locale::uk(), &Locale::uk()));
        assert!(are_compatible(&Locale::english(), &Locale::english()));
    }

    #[test]
    fn missing_country_is_compatible_in_both_directions() {
        assert!(are_compatible(&Locale::english(), &Locale::uk()));
        assert!(are_compatible(&Locale::uk(), &Locale::english()));
    }

    #[test]
    fn different_countries_are_incompatible() {
        assert!(!are_compatible(&Locale::uk(), &Locale::us()));
    }

    #[test]
    fn different_languages_are_incompatible() {
        assert!(!are_compatible(&Locale::new("fr"), &Locale::english()));
        assert!(!are_compatible(
            &Locale::with_country("fr", "GB"),
            &Locale::english()
        ));
    }

    #[test]
    fn over_long_language_is_truncated_for_comparison() {
        let long = Locale::new("eng");
        assert_eq!(long.language_key(), "en");
        assert!(are_compatible(&long, &Locale::uk()));
        // Exact equality still sees the full code
        assert_ne!(long, Locale::english());
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&Locale::uk()).unwrap();
        assert_eq!(json, "\"en_GB\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::uk());
    }
}
