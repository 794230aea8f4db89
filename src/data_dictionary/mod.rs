//! Data Dictionary - Concepts and their localized names
//!
//! A concept holds names and descriptions in many locales. Editors designate
//! names as preferred or short for a language or a country; readers resolve
//! the name that best fits their locale.
//!
//! - `store` / `cache`: candidate storage and the per-locale compatibility lists
//! - `designation`: exclusive preferred / short tagging
//! - `resolver`: ranked name and description lookup
//! - `concept`: the shared, lock-guarded entity tying these together

mod cache;
pub mod candidate;
pub mod concept;
mod designation;
pub mod ids;
pub mod kind;
mod resolver;
pub mod seed;
mod store;
pub mod tags;

// Re-export key types for convenience
pub use candidate::{DescriptionCandidate, NameCandidate, TagSet};
pub use concept::Concept;
pub use ids::{ConceptId, DescriptionId, NameId};
pub use kind::{ConceptKind, NumericRange};
pub use seed::{ConceptSeed, DescriptionSeed, DictionarySeed, NameSeed};
pub use tags::{DesignationPurpose, DesignationTag, ScopedTags};
