//! Candidate store - owns a concept's names and descriptions.
//!
//! Names and descriptions are kept in insertion order so every scan, and
//! therefore every tie-break, is deterministic. Voided names stay in the
//! store for audit but are skipped by every "active" accessor.

use super::candidate::{DescriptionCandidate, NameCandidate};
use super::ids::{DescriptionId, NameId};
use super::tags::DesignationTag;
use crate::locale::Locale;

#[derive(Debug, Clone, Default)]
pub(crate) struct CandidateStore {
    names: Vec<NameCandidate>,
    descriptions: Vec<DescriptionCandidate>,
}

impl CandidateStore {
    // =========================================================================
    // Names
    // =========================================================================

    /// Attach a name. Returns false if a name with the same id is present.
    pub fn add_name(&mut self, name: NameCandidate) -> bool {
        if self.position_of(name.id).is_some() {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn remove_name(&mut self, id: NameId) -> Option<NameCandidate> {
        self.position_of(id).map(|pos| self.names.remove(pos))
    }

    /// All names including voided ones
    pub fn all_names(&self) -> &[NameCandidate] {
        &self.names
    }

    /// Non-voided names in insertion order
    pub fn active_names(&self) -> impl Iterator<Item = &NameCandidate> {
        self.names.iter().filter(|n| !n.voided)
    }

    pub fn active_count(&self) -> usize {
        self.active_names().count()
    }

    /// First non-voided name, regardless of locale
    pub fn first_active(&self) -> Option<&NameCandidate> {
        self.active_names().next()
    }

    /// Non-voided names whose locale is exactly `locale`
    pub fn names_in_locale<'a>(
        &'a self,
        locale: &'a Locale,
    ) -> impl Iterator<Item = &'a NameCandidate> + 'a {
        self.active_names().filter(move |n| n.locale == *locale)
    }

    pub fn name(&self, id: NameId) -> Option<&NameCandidate> {
        self.names.iter().find(|n| n.id == id)
    }

    pub fn name_at(&self, pos: usize) -> Option<&NameCandidate> {
        self.names.get(pos)
    }

    pub fn name_at_mut(&mut self, pos: usize) -> Option<&mut NameCandidate> {
        self.names.get_mut(pos)
    }

    pub fn position_of(&self, id: NameId) -> Option<usize> {
        self.names.iter().position(|n| n.id == id)
    }

    /// Position of the first non-voided name with this text in this exact locale
    pub fn position_known_as(&self, text: &str, locale: &Locale) -> Option<usize> {
        self.names
            .iter()
            .position(|n| !n.voided && n.name == text && n.locale == *locale)
    }

    /// First non-voided name holding `tag`
    pub fn find_tagged(&self, tag: &DesignationTag) -> Option<&NameCandidate> {
        self.active_names().find(|n| n.has_tag(tag))
    }

    /// Positions of every non-voided name holding `tag`
    pub fn positions_tagged(&self, tag: &DesignationTag) -> Vec<usize> {
        self.names
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.voided && n.has_tag(tag))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Positions of non-voided names compatible with `locale`, in order
    pub fn compatible_positions(&self, locale: &Locale) -> Vec<usize> {
        self.names
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.voided && n.locale.is_compatible_with(locale))
            .map(|(pos, _)| pos)
            .collect()
    }

    // =========================================================================
    // Descriptions
    // =========================================================================

    /// Attach a description. Returns false if one with the same id is present.
    pub fn add_description(&mut self, description: DescriptionCandidate) -> bool {
        if self.descriptions.iter().any(|d| d.id == description.id) {
            return false;
        }
        self.descriptions.push(description);
        true
    }

    pub fn remove_description(&mut self, id: DescriptionId) -> bool {
        match self.descriptions.iter().position(|d| d.id == id) {
            Some(pos) => {
                self.descriptions.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn descriptions(&self) -> &[DescriptionCandidate] {
        &self.descriptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: Vec<NameCandidate>) -> CandidateStore {
        let mut store = CandidateStore::default();
        for name in names {
            store.add_name(name);
        }
        store
    }

    #[test]
    fn add_name_rejects_same_id() {
        let name = NameCandidate::new("Fever", Locale::english());
        let mut store = CandidateStore::default();
        assert!(store.add_name(name.clone()));
        assert!(!store.add_name(name));
        assert_eq!(store.all_names().len(), 1);
    }

    #[test]
    fn identical_text_with_new_id_is_a_separate_name() {
        let mut store = CandidateStore::default();
        assert!(store.add_name(NameCandidate::new("Fever", Locale::english())));
        assert!(store.add_name(NameCandidate::new("Fever", Locale::english())));
        assert_eq!(store.active_count(), 2);
    }

    #[test]
    fn voided_names_are_hidden_from_active_accessors() {
        let mut voided = NameCandidate::new("Old", Locale::english())
            .with_tag(DesignationTag::Preferred);
        voided.void("replaced");
        let store = store_with(vec![voided, NameCandidate::new("New", Locale::english())]);

        assert_eq!(store.all_names().len(), 2);
        assert_eq!(store.active_count(), 1);
        assert_eq!(store.first_active().unwrap().name, "New");
        assert!(store.find_tagged(&DesignationTag::Preferred).is_none());
        assert!(store.position_known_as("Old", &Locale::english()).is_none());
        assert_eq!(store.compatible_positions(&Locale::english()), vec![1]);
    }

    #[test]
    fn names_in_locale_is_exact() {
        let store = store_with(vec![
            NameCandidate::new("Fever", Locale::english()),
            NameCandidate::new("Pyrexia", Locale::uk()),
        ]);
        let uk = Locale::uk();
        let names: Vec<_> = store.names_in_locale(&uk).map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Pyrexia"]);
    }

    #[test]
    fn compatible_positions_follow_insertion_order() {
        let store = store_with(vec![
            NameCandidate::new("Pyrexia", Locale::uk()),
            NameCandidate::new("Fiebre", Locale::new("es")),
            NameCandidate::new("Fever", Locale::english()),
            NameCandidate::new("Fever (US)", Locale::us()),
        ]);
        assert_eq!(store.compatible_positions(&Locale::uk()), vec![0, 2]);
        assert_eq!(store.compatible_positions(&Locale::english()), vec![0, 2, 3]);
    }

    #[test]
    fn remove_name_by_id() {
        let name = NameCandidate::new("Fever", Locale::english());
        let id = name.id;
        let mut store = store_with(vec![name]);
        assert_eq!(store.remove_name(id).unwrap().name, "Fever");
        assert!(store.remove_name(id).is_none());
    }

    #[test]
    fn descriptions_dedupe_by_id() {
        let desc = DescriptionCandidate::new("A raised temperature", Locale::english());
        let id = desc.id;
        let mut store = CandidateStore::default();
        assert!(store.add_description(desc.clone()));
        assert!(!store.add_description(desc));
        assert!(store.remove_description(id));
        assert!(!store.remove_description(id));
        assert!(store.descriptions().is_empty());
    }
}
