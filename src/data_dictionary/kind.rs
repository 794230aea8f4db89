//! Concept kinds
//!
//! What a concept's observations hold. Kind-specific data (the numeric
//! reference range) lives on the variant instead of on a concept subtype.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConceptKind {
    /// Answered with a number, within an optional reference range
    Numeric(NumericRange),
    /// Answered with one of the concept's answer concepts
    Coded,
    /// Free text
    Text,
    /// Any other datatype, named by the dictionary
    Other { datatype: String },
    /// No datatype (question headers, answers, sets)
    #[default]
    NotApplicable,
}

impl ConceptKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn is_coded(&self) -> bool {
        matches!(self, Self::Coded)
    }

    pub fn numeric_range(&self) -> Option<&NumericRange> {
        match self {
            Self::Numeric(range) => Some(range),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Coded => "coded",
            Self::Text => "text",
            Self::Other { datatype } => datatype,
            Self::NotApplicable => "n/a",
        }
    }
}

/// Absolute, critical and normal bounds for a numeric concept. Any bound may
/// be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericRange {
    pub hi_absolute: Option<f64>,
    pub hi_critical: Option<f64>,
    pub hi_normal: Option<f64>,
    pub low_normal: Option<f64>,
    pub low_critical: Option<f64>,
    pub low_absolute: Option<f64>,
    pub units: Option<String>,
    /// Whether values keep decimals
    pub precise: bool,
}

impl NumericRange {
    /// True if `value` is inside the absolute bounds (missing bounds are open)
    pub fn accepts(&self, value: f64) -> bool {
        self.low_absolute.map_or(true, |low| value >= low)
            && self.hi_absolute.map_or(true, |hi| value <= hi)
    }

    /// True if `value` is inside the normal bounds (missing bounds are open)
    pub fn is_normal(&self, value: f64) -> bool {
        self.low_normal.map_or(true, |low| value >= low)
            && self.hi_normal.map_or(true, |hi| value <= hi)
    }

    /// True if `value` is at or beyond either critical bound
    pub fn is_critical(&self, value: f64) -> bool {
        self.low_critical.is_some_and(|low| value <= low)
            || self.hi_critical.is_some_and(|hi| value >= hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature() -> NumericRange {
        NumericRange {
            hi_absolute: Some(45.0),
            hi_critical: Some(41.0),
            hi_normal: Some(37.5),
            low_normal: Some(36.0),
            low_critical: Some(33.0),
            low_absolute: Some(25.0),
            units: Some("DEG C".into()),
            precise: true,
        }
    }

    #[test]
    fn kind_checks_are_explicit() {
        let kind = ConceptKind::Numeric(temperature());
        assert!(kind.is_numeric());
        assert!(!kind.is_coded());
        assert_eq!(kind.numeric_range().unwrap().units.as_deref(), Some("DEG C"));
        assert!(ConceptKind::Coded.numeric_range().is_none());
    }

    #[test]
    fn range_checks() {
        let range = temperature();
        assert!(range.accepts(39.0));
        assert!(!range.accepts(50.0));
        assert!(range.is_normal(37.0));
        assert!(!range.is_normal(38.5));
        assert!(range.is_critical(41.0));
        assert!(range.is_critical(32.0));
        assert!(!range.is_critical(38.0));
    }

    #[test]
    fn open_bounds_accept_everything() {
        let range = NumericRange::default();
        assert!(range.accepts(-1000.0));
        assert!(!range.is_critical(1000.0));
    }

    #[test]
    fn serde_tagged_form() {
        let kind: ConceptKind =
            serde_yaml::from_str("type: numeric\nhi_normal: 37.5\nunits: DEG C\n").unwrap();
        assert_eq!(kind.numeric_range().unwrap().hi_normal, Some(37.5));

        let kind: ConceptKind = serde_yaml::from_str("type: other\ndatatype: Boolean\n").unwrap();
        assert_eq!(kind.as_str(), "Boolean");
    }
}
