//! Name and description candidates attached to a concept

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ids::{ConceptId, DescriptionId, NameId};
use super::tags::DesignationTag;
use crate::locale::Locale;

/// Designation tags held by one name. Most names carry zero to three.
pub type TagSet = SmallVec<[DesignationTag; 4]>;

/// A localized name for a concept.
///
/// Candidates handed out by a [`Concept`](super::Concept) are snapshots;
/// changing them has no effect on the concept. Tags on attached names only
/// change through the concept's designation calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameCandidate {
    pub id: NameId,
    /// Owning concept, set when the name is attached
    pub concept_id: Option<ConceptId>,
    pub name: String,
    pub locale: Locale,
    tags: TagSet,
    pub voided: bool,
    pub void_reason: Option<String>,
    pub date_voided: Option<DateTime<Utc>>,
    pub date_created: DateTime<Utc>,
}

impl NameCandidate {
    pub fn new(name: impl Into<String>, locale: Locale) -> Self {
        Self {
            id: NameId::new(),
            concept_id: None,
            name: name.into(),
            locale,
            tags: TagSet::new(),
            voided: false,
            void_reason: None,
            date_voided: None,
            date_created: Utc::now(),
        }
    }

    /// Builder-style tag assignment for names not yet attached to a concept
    pub fn with_tag(mut self, tag: DesignationTag) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn tags(&self) -> &[DesignationTag] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &DesignationTag) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_preferred(&self) -> bool {
        self.has_tag(&DesignationTag::Preferred)
    }

    pub fn is_short(&self) -> bool {
        self.has_tag(&DesignationTag::Short)
    }

    pub fn is_synonym(&self) -> bool {
        self.has_tag(&DesignationTag::Synonym)
    }

    /// Number of characters in the display text
    pub fn char_len(&self) -> usize {
        self.name.chars().count()
    }

    /// Returns true if the tag was not already present
    pub(crate) fn add_tag(&mut self, tag: DesignationTag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Returns true if the tag was present
    pub(crate) fn remove_tag(&mut self, tag: &DesignationTag) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(pos) => {
                self.tags.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn void(&mut self, reason: impl Into<String>) {
        self.voided = true;
        self.void_reason = Some(reason.into());
        self.date_voided = Some(Utc::now());
    }

    pub(crate) fn unvoid(&mut self) {
        self.voided = false;
        self.void_reason = None;
        self.date_voided = None;
    }
}

/// A localized free-text description for a concept. Descriptions carry no
/// tags; only locale matters when resolving them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionCandidate {
    pub id: DescriptionId,
    pub concept_id: Option<ConceptId>,
    pub description: String,
    pub locale: Locale,
    pub date_created: DateTime<Utc>,
}

impl DescriptionCandidate {
    pub fn new(description: impl Into<String>, locale: Locale) -> Self {
        Self {
            id: DescriptionId::new(),
            concept_id: None,
            description: description.into(),
            locale,
            date_created: Utc::now(),
        }
    }
}
