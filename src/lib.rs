//! Concept Naming - locale-aware names for clinical dictionary concepts
//!
//! A [`Concept`] owns localized names and descriptions. Names can be
//! designated preferred or short for a language or a country, and every
//! lookup resolves the name that best fits the caller's locale, falling back
//! through the language, generic designations and finally any name.
//!
//! ## Quick Start
//!
//! ```rust
//! use concept_naming::{Concept, ConceptKind, Locale, NameCandidate};
//!
//! let fever = Concept::new(5089, ConceptKind::Coded);
//! fever
//!     .set_preferred_name(&Locale::english(), NameCandidate::new("Fever", Locale::english()))
//!     .unwrap();
//! fever
//!     .set_preferred_name(&Locale::uk(), NameCandidate::new("Pyrexia", Locale::uk()))
//!     .unwrap();
//!
//! assert_eq!(fever.get_best_name(Some(&Locale::uk())).unwrap().name, "Pyrexia");
//! assert_eq!(fever.get_best_name(Some(&Locale::us())).unwrap().name, "Fever");
//! ```

// Core error handling
pub mod error;

// Locales and naming config
pub mod config;
pub mod locale;

// Concepts, names and resolution
pub mod data_dictionary;

pub mod logging;

pub use config::NamingConfig;
pub use data_dictionary::{
    Concept, ConceptId, ConceptKind, DescriptionCandidate, DesignationTag, NameCandidate, NameId,
};
pub use error::{ConceptError, Result};
pub use locale::{FixedLocaleSource, Locale, LocaleSource};
