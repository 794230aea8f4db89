//! Designation tags
//!
//! A small closed vocabulary: three generic tags plus four tag families
//! scoped to a language or a country. Scoped tags are derived from a locale,
//! and a country-scoped tag exists only when the locale names a country.
//!
//! Textual form (used for serde and display):
//!
//! | Tag | Text |
//! |-----|------|
//! | generic preferred | `PREFERRED` |
//! | generic short | `SHORT` |
//! | synonym | `SYNONYM` |
//! | preferred in language | `PREFERRED_LANGUAGE:en` |
//! | preferred in country | `PREFERRED_COUNTRY:GB` |
//! | short in language | `SHORT_LANGUAGE:en` |
//! | short in country | `SHORT_COUNTRY:GB` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConceptError;
use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DesignationTag {
    Preferred,
    Short,
    Synonym,
    PreferredLanguage(String),
    PreferredCountry(String),
    ShortLanguage(String),
    ShortCountry(String),
}

impl DesignationTag {
    pub fn preferred_language(language: &str) -> Self {
        Self::PreferredLanguage(normalize_language(language))
    }

    pub fn preferred_country(country: &str) -> Self {
        Self::PreferredCountry(normalize_country(country))
    }

    pub fn short_language(language: &str) -> Self {
        Self::ShortLanguage(normalize_language(language))
    }

    pub fn short_country(country: &str) -> Self {
        Self::ShortCountry(normalize_country(country))
    }

    /// True for the four language/country-scoped families
    pub fn is_scoped(&self) -> bool {
        !matches!(self, Self::Preferred | Self::Short | Self::Synonym)
    }
}

/// Language scopes use the same two-letter key as locale compatibility
fn normalize_language(language: &str) -> String {
    language.trim().to_ascii_lowercase().chars().take(2).collect()
}

fn normalize_country(country: &str) -> String {
    country.trim().to_ascii_uppercase()
}

impl fmt::Display for DesignationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preferred => write!(f, "PREFERRED"),
            Self::Short => write!(f, "SHORT"),
            Self::Synonym => write!(f, "SYNONYM"),
            Self::PreferredLanguage(lang) => write!(f, "PREFERRED_LANGUAGE:{lang}"),
            Self::PreferredCountry(country) => write!(f, "PREFERRED_COUNTRY:{country}"),
            Self::ShortLanguage(lang) => write!(f, "SHORT_LANGUAGE:{lang}"),
            Self::ShortCountry(country) => write!(f, "SHORT_COUNTRY:{country}"),
        }
    }
}

impl FromStr for DesignationTag {
    type Err = ConceptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (family, scope) = match s.split_once(':') {
            Some((family, scope)) => (family, Some(scope.trim())),
            None => (s, None),
        };

        match (family.to_ascii_uppercase().as_str(), scope) {
            ("PREFERRED", None) => Ok(Self::Preferred),
            ("SHORT", None) => Ok(Self::Short),
            ("SYNONYM", None) => Ok(Self::Synonym),
            (_, Some("")) => Err(ConceptError::InvalidTag(s.to_string())),
            ("PREFERRED_LANGUAGE", Some(scope)) => Ok(Self::preferred_language(scope)),
            ("PREFERRED_COUNTRY", Some(scope)) => Ok(Self::preferred_country(scope)),
            ("SHORT_LANGUAGE", Some(scope)) => Ok(Self::short_language(scope)),
            ("SHORT_COUNTRY", Some(scope)) => Ok(Self::short_country(scope)),
            _ => Err(ConceptError::InvalidTag(s.to_string())),
        }
    }
}

impl TryFrom<String> for DesignationTag {
    type Error = ConceptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DesignationTag> for String {
    fn from(tag: DesignationTag) -> Self {
        tag.to_string()
    }
}

// ── Purpose-scoped derivation ─────────────────────────────────

/// What an editorial designation marks a name as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignationPurpose {
    Preferred,
    Short,
}

impl DesignationPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preferred => "preferred",
            Self::Short => "short",
        }
    }

    /// The generic (unscoped) tag for this purpose
    pub fn generic_tag(&self) -> DesignationTag {
        match self {
            Self::Preferred => DesignationTag::Preferred,
            Self::Short => DesignationTag::Short,
        }
    }

    pub fn language_tag(&self, language: &str) -> DesignationTag {
        match self {
            Self::Preferred => DesignationTag::preferred_language(language),
            Self::Short => DesignationTag::short_language(language),
        }
    }

    pub fn country_tag(&self, country: &str) -> DesignationTag {
        match self {
            Self::Preferred => DesignationTag::preferred_country(country),
            Self::Short => DesignationTag::short_country(country),
        }
    }

    /// Derive the scoped tags for a locale
    pub fn scoped_tags(&self, locale: &Locale) -> ScopedTags {
        ScopedTags {
            language: self.language_tag(locale.language_key()),
            country: locale.country().map(|c| self.country_tag(c)),
        }
    }
}

/// Scoped tags derived from one locale for one purpose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedTags {
    pub language: DesignationTag,
    /// Present only when the locale names a country
    pub country: Option<DesignationTag>,
}
