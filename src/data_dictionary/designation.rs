//! Designation manager - editorial "preferred" and "short" designations.
//!
//! A designation puts a language-scoped and, when the locale has a country,
//! a country-scoped tag on one name. At most one non-voided name holds any
//! scoped tag at a time; granting it to a name strips it from the others.
//!
//! Designating for a locale with a country only *implies* the language-level
//! designation: the language tag is granted as well only if no name holds it
//! yet. Designating for a bare language is explicit and always moves the
//! language tag.

use tracing::debug;

use super::candidate::NameCandidate;
use super::ids::{ConceptId, NameId};
use super::store::CandidateStore;
use super::tags::{DesignationPurpose, DesignationTag};
use crate::locale::Locale;

/// Apply a designation for `locale` to `candidate`, returning the id of the
/// name that was actually tagged.
///
/// An active name with the same text in the same locale is reused in place
/// of `candidate`; a candidate whose id is already attached is tagged in
/// place. Otherwise `candidate` is attached to the store.
pub(crate) fn designate(
    store: &mut CandidateStore,
    concept_id: ConceptId,
    purpose: DesignationPurpose,
    locale: &Locale,
    mut candidate: NameCandidate,
) -> NameId {
    let target = match store
        .position_known_as(&candidate.name, locale)
        .or_else(|| store.position_of(candidate.id))
    {
        Some(pos) => pos,
        None => {
            candidate.concept_id = Some(concept_id);
            store.add_name(candidate);
            store.all_names().len() - 1
        }
    };

    designate_at(store, purpose, locale, target);

    let id = store.all_names()[target].id;
    debug!(
        %concept_id,
        name_id = %id,
        %locale,
        purpose = purpose.as_str(),
        "Applied name designation"
    );
    id
}

/// Apply a designation to the name already stored at `target`
pub(crate) fn designate_at(
    store: &mut CandidateStore,
    purpose: DesignationPurpose,
    locale: &Locale,
    target: usize,
) {
    let tags = purpose.scoped_tags(locale);

    match tags.country {
        Some(country_tag) => {
            if store.find_tagged(&tags.language).is_none() {
                grant(store, target, tags.language);
            }
            strip_others(store, target, &country_tag);
            grant(store, target, country_tag);
        }
        None => {
            strip_others(store, target, &tags.language);
            grant(store, target, tags.language);
        }
    }
}

/// Drop from the name at `pos` every scoped tag another active name already
/// holds. Used when a name (re)enters the active set carrying tags, so the
/// current holder keeps its designation. Returns the dropped tags.
pub(crate) fn yield_held_tags(store: &mut CandidateStore, pos: usize) -> Vec<DesignationTag> {
    let Some(name) = store.name_at(pos) else {
        return Vec::new();
    };
    if name.voided {
        return Vec::new();
    }
    let held: Vec<DesignationTag> = name
        .tags()
        .iter()
        .filter(|tag| tag.is_scoped())
        .filter(|tag| store.positions_tagged(tag).iter().any(|&other| other != pos))
        .cloned()
        .collect();

    if let Some(name) = store.name_at_mut(pos) {
        for tag in &held {
            name.remove_tag(tag);
        }
        if !held.is_empty() {
            debug!(name_id = %name.id, dropped = held.len(), "Dropped designations held elsewhere");
        }
    }
    held
}

fn grant(store: &mut CandidateStore, pos: usize, tag: DesignationTag) {
    if let Some(name) = store.name_at_mut(pos) {
        name.add_tag(tag);
    }
}

fn strip_others(store: &mut CandidateStore, keep: usize, tag: &DesignationTag) {
    for pos in store.positions_tagged(tag) {
        if pos == keep {
            continue;
        }
        if let Some(name) = store.name_at_mut(pos) {
            name.remove_tag(tag);
        }
    }
}
