//! Concept - a dictionary entry with localized names and descriptions.
//!
//! The naming state (candidate store plus compatibility cache) sits behind a
//! single `RwLock`. Every mutation takes the write lock and clears the cache
//! before releasing it, so no reader can pair the old cache with the new
//! name set. Reads take the read lock and fill cache entries on demand.
//!
//! Every resolution call takes an optional locale; `None` means the caller's
//! current locale as reported by the concept's [`LocaleSource`].

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::cache::CompatibilityCache;
use super::candidate::{DescriptionCandidate, NameCandidate};
use super::designation;
use super::ids::{ConceptId, DescriptionId, NameId};
use super::kind::ConceptKind;
use super::resolver::{self, NameResolver};
use super::store::CandidateStore;
use super::tags::{DesignationPurpose, DesignationTag};
use crate::config::NamingConfig;
use crate::error::{ConceptError, Result};
use crate::locale::{Locale, LocaleSource};

// =============================================================================
// Internal state
// =============================================================================

#[derive(Debug, Default)]
struct NamingState {
    store: CandidateStore,
    cache: CompatibilityCache,
}

impl NamingState {
    /// Active names compatible with `locale`, in stored order
    fn compatible(&self, locale: &Locale) -> Vec<&NameCandidate> {
        self.cache
            .get_or_build(locale, &self.store)
            .iter()
            .filter_map(|&pos| self.store.name_at(pos))
            .collect()
    }
}

#[derive(Debug, Default)]
struct ConceptDetails {
    retired: bool,
    retire_reason: Option<String>,
    date_retired: Option<DateTime<Utc>>,
    answers: Vec<Arc<Concept>>,
}

#[derive(Debug, Clone, Copy)]
enum NameQuery {
    Name { exact: bool },
    Preferred,
    Best,
    BestShort,
    ShortInLocale,
}

// =============================================================================
// Concept
// =============================================================================

pub struct Concept {
    id: ConceptId,
    kind: ConceptKind,
    config: Arc<NamingConfig>,
    locale_source: Arc<dyn LocaleSource>,
    naming: RwLock<NamingState>,
    details: RwLock<ConceptDetails>,
}

impl fmt::Debug for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concept")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Concept {
    /// Create a concept with the default naming config
    pub fn new(id: u32, kind: ConceptKind) -> Self {
        let config = NamingConfig::default();
        Self {
            id: ConceptId::new(id),
            kind,
            locale_source: Arc::new(config.locale_source()),
            config: Arc::new(config),
            naming: RwLock::new(NamingState::default()),
            details: RwLock::new(ConceptDetails::default()),
        }
    }

    /// Replace the naming config. The ambient locale follows the config's
    /// `current_locale` until [`Concept::with_locale_source`] overrides it.
    pub fn with_config(mut self, config: NamingConfig) -> Self {
        self.locale_source = Arc::new(config.locale_source());
        self.config = Arc::new(config);
        self
    }

    pub fn with_locale_source(mut self, source: Arc<dyn LocaleSource>) -> Self {
        self.locale_source = source;
        self
    }

    pub fn id(&self) -> ConceptId {
        self.id
    }

    pub fn kind(&self) -> &ConceptKind {
        &self.kind
    }

    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    fn resolve_locale(&self, locale: Option<&Locale>) -> Locale {
        match locale {
            Some(locale) => locale.clone(),
            None => self.locale_source.current_locale(),
        }
    }

    fn read_naming(&self) -> RwLockReadGuard<'_, NamingState> {
        self.naming.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a mutation under the write lock and clear the compatibility cache
    /// in the same critical section.
    fn mutate<R>(&self, f: impl FnOnce(&mut CandidateStore) -> R) -> R {
        let mut state = self.naming.write().unwrap_or_else(PoisonError::into_inner);
        let result = f(&mut state.store);
        state.cache.clear();
        result
    }

    // =========================================================================
    // Candidate store
    // =========================================================================

    /// Attach a name. Returns true if it was newly added.
    ///
    /// Scoped designations the name carries that another active name
    /// already holds are dropped from the new name.
    pub fn add_name(&self, mut name: NameCandidate) -> bool {
        name.concept_id = Some(self.id);
        self.mutate(|store| {
            if !store.add_name(name) {
                return false;
            }
            let pos = store.all_names().len() - 1;
            designation::yield_held_tags(store, pos);
            true
        })
    }

    /// Detach a name entirely. Prefer [`Concept::void_name`] for retiring a
    /// name that may have been used.
    pub fn remove_name(&self, id: NameId) -> bool {
        self.mutate(|store| store.remove_name(id).is_some())
    }

    /// Mark a name voided. It stays addressable but drops out of resolution.
    pub fn void_name(&self, id: NameId, reason: &str) -> bool {
        self.mutate(|store| match store.position_of(id) {
            Some(pos) => {
                if let Some(name) = store.name_at_mut(pos) {
                    name.void(reason);
                }
                true
            }
            None => false,
        })
    }

    /// Restore a voided name. Scoped designations it held that were moved
    /// to another name while it was voided stay with that name.
    pub fn unvoid_name(&self, id: NameId) -> bool {
        self.mutate(|store| match store.position_of(id) {
            Some(pos) => {
                if let Some(name) = store.name_at_mut(pos) {
                    name.unvoid();
                }
                designation::yield_held_tags(store, pos);
                true
            }
            None => false,
        })
    }

    pub fn get_names(&self, include_voided: bool) -> Vec<NameCandidate> {
        let state = self.read_naming();
        if include_voided {
            state.store.all_names().to_vec()
        } else {
            state.store.active_names().cloned().collect()
        }
    }

    /// Active names whose locale is exactly `locale`
    pub fn get_names_in_locale(&self, locale: &Locale) -> Vec<NameCandidate> {
        self.read_naming()
            .store
            .names_in_locale(locale)
            .cloned()
            .collect()
    }

    /// Look up a name by id, voided or not
    pub fn name_by_id(&self, id: NameId) -> Option<NameCandidate> {
        self.read_naming().store.name(id).cloned()
    }

    /// Active names compatible with the locale, in stored order
    pub fn get_compatible_names(&self, locale: Option<&Locale>) -> Vec<NameCandidate> {
        let locale = self.resolve_locale(locale);
        let state = self.read_naming();
        state.compatible(&locale).into_iter().cloned().collect()
    }

    /// Whether an active name has this text; `locale = None` checks every
    /// locale, otherwise only names in exactly that locale.
    pub fn has_name(&self, text: &str, locale: Option<&Locale>) -> bool {
        let state = self.read_naming();
        match locale {
            Some(locale) => state.store.names_in_locale(locale).any(|n| n.name == text),
            None => state.store.active_names().any(|n| n.name == text),
        }
    }

    pub fn is_named(&self, text: &str) -> bool {
        self.has_name(text, None)
    }

    /// First active name with this text in exactly this locale
    pub fn get_name_known_as(&self, text: &str, locale: &Locale) -> Option<NameCandidate> {
        let state = self.read_naming();
        state
            .store
            .position_known_as(text, locale)
            .and_then(|pos| state.store.name_at(pos))
            .cloned()
    }

    /// First active name holding `tag`
    pub fn find_name_tagged_with(&self, tag: &DesignationTag) -> Option<NameCandidate> {
        self.read_naming().store.find_tagged(tag).cloned()
    }

    /// Active SYNONYM-tagged names in the locale's language
    pub fn get_synonyms(&self, locale: &Locale) -> Vec<NameCandidate> {
        let state = self.read_naming();
        state
            .store
            .active_names()
            .filter(|n| n.is_synonym() && n.locale.language_key() == locale.language_key())
            .cloned()
            .collect()
    }

    /// Number of locales currently held in the compatibility cache
    pub fn cached_locale_count(&self) -> usize {
        self.read_naming().cache.len()
    }

    // =========================================================================
    // Designations
    // =========================================================================

    /// Designate a name as preferred for `locale`.
    ///
    /// An existing active name with the same text in the same locale is
    /// tagged instead of `name`. Returns the id of the name that was tagged.
    pub fn set_preferred_name(&self, locale: &Locale, name: NameCandidate) -> Result<NameId> {
        self.designate(DesignationPurpose::Preferred, locale, name)
    }

    /// Designate a name as the short name for `locale`. Same reuse rules as
    /// [`Concept::set_preferred_name`].
    pub fn set_short_name(&self, locale: &Locale, name: NameCandidate) -> Result<NameId> {
        self.designate(DesignationPurpose::Short, locale, name)
    }

    /// Designate an attached name, by id, as preferred for `locale`
    pub fn set_preferred_name_by_id(&self, locale: &Locale, id: NameId) -> Result<()> {
        self.designate_existing(DesignationPurpose::Preferred, locale, id)
    }

    /// Designate an attached name, by id, as short for `locale`
    pub fn set_short_name_by_id(&self, locale: &Locale, id: NameId) -> Result<()> {
        self.designate_existing(DesignationPurpose::Short, locale, id)
    }

    fn designate(
        &self,
        purpose: DesignationPurpose,
        locale: &Locale,
        name: NameCandidate,
    ) -> Result<NameId> {
        if name.name.trim().is_empty() {
            return Err(ConceptError::InvalidInput(format!(
                "{} name for {} must not be blank",
                purpose.as_str(),
                locale
            )));
        }
        if name.voided {
            return Err(ConceptError::InvalidInput(format!(
                "cannot designate voided name {}",
                name.id
            )));
        }
        let concept_id = self.id;
        Ok(self.mutate(|store| designation::designate(store, concept_id, purpose, locale, name)))
    }

    fn designate_existing(
        &self,
        purpose: DesignationPurpose,
        locale: &Locale,
        id: NameId,
    ) -> Result<()> {
        self.mutate(|store| {
            let pos = store
                .position_of(id)
                .filter(|&pos| store.name_at(pos).is_some_and(|n| !n.voided))
                .ok_or_else(|| ConceptError::NotFound(format!("active name {id}")))?;
            designation::designate_at(store, purpose, locale, pos);
            Ok(())
        })
    }

    pub fn get_preferred_name_for_country(&self, country: &str) -> Option<NameCandidate> {
        self.find_name_tagged_with(&DesignationTag::preferred_country(country))
    }

    pub fn get_preferred_name_in_language(&self, language: &str) -> Option<NameCandidate> {
        self.find_name_tagged_with(&DesignationTag::preferred_language(language))
    }

    pub fn get_short_name_for_country(&self, country: &str) -> Option<NameCandidate> {
        self.find_name_tagged_with(&DesignationTag::short_country(country))
    }

    pub fn get_short_name_in_language(&self, language: &str) -> Option<NameCandidate> {
        self.find_name_tagged_with(&DesignationTag::short_language(language))
    }

    /// Short name designated for the locale's country (or its language when
    /// the locale has no country), else a compatible name tagged SHORT
    pub fn get_short_name_in_locale(&self, locale: Option<&Locale>) -> Option<NameCandidate> {
        self.resolve_name(locale, NameQuery::ShortInLocale)
    }

    // =========================================================================
    // Name resolution
    // =========================================================================

    fn resolve_name(&self, locale: Option<&Locale>, query: NameQuery) -> Option<NameCandidate> {
        let locale = self.resolve_locale(locale);
        let state = self.read_naming();
        let resolver = NameResolver::new(self.id, &state.store, state.compatible(&locale), &locale);

        let found = match query {
            NameQuery::Name { exact } => resolver.name(exact),
            NameQuery::Preferred => resolver.preferred_name(),
            NameQuery::Best => resolver.best_name(),
            NameQuery::BestShort => resolver.best_short_name(),
            NameQuery::ShortInLocale => resolver.short_name_in_locale(),
        };
        found.cloned()
    }

    /// Name for the locale, falling back to any name
    pub fn get_name(&self, locale: Option<&Locale>) -> Option<NameCandidate> {
        self.get_name_exact(locale, false)
    }

    /// Name for the locale; with `exact`, only an explicit designation for
    /// the locale qualifies
    pub fn get_name_exact(&self, locale: Option<&Locale>, exact: bool) -> Option<NameCandidate> {
        self.resolve_name(locale, NameQuery::Name { exact })
    }

    /// Name explicitly designated preferred for the locale, if any
    pub fn get_preferred_name(&self, locale: Option<&Locale>) -> Option<NameCandidate> {
        self.resolve_name(locale, NameQuery::Preferred)
    }

    /// Best name for the locale. Always `Some` when an active name exists.
    pub fn get_best_name(&self, locale: Option<&Locale>) -> Option<NameCandidate> {
        self.resolve_name(locale, NameQuery::Best)
    }

    /// Best short name for the locale. Always `Some` when an active name
    /// exists.
    pub fn get_best_short_name(&self, locale: Option<&Locale>) -> Option<NameCandidate> {
        self.resolve_name(locale, NameQuery::BestShort)
    }

    /// Shortest active name, ignoring locale. `locale = None` uses the
    /// configured shortest-name locale; `exact` always yields `None`.
    pub fn get_shortest_name(&self, locale: Option<&Locale>, exact: bool) -> Option<NameCandidate> {
        let locale = locale.unwrap_or(&self.config.shortest_name_locale);
        let state = self.read_naming();
        resolver::shortest_name(self.id, &state.store, locale, exact).cloned()
    }

    /// Text to show for this concept in the current locale
    pub fn display_string(&self) -> String {
        match self.get_name(None) {
            Some(name) => name.name,
            None => self.id.to_string(),
        }
    }

    // =========================================================================
    // Descriptions
    // =========================================================================

    /// Attach a description. Returns true if it was newly added.
    pub fn add_description(&self, mut description: DescriptionCandidate) -> bool {
        description.concept_id = Some(self.id);
        self.mutate(|store| store.add_description(description))
    }

    pub fn remove_description(&self, id: DescriptionId) -> bool {
        self.mutate(|store| store.remove_description(id))
    }

    pub fn get_descriptions(&self) -> Vec<DescriptionCandidate> {
        self.read_naming().store.descriptions().to_vec()
    }

    /// Description for the locale; unless `exact`, falls back to a compatible
    /// description and then to the configured default locale
    pub fn get_description(
        &self,
        locale: Option<&Locale>,
        exact: bool,
    ) -> Option<DescriptionCandidate> {
        let locale = self.resolve_locale(locale);
        let state = self.read_naming();
        resolver::description(
            self.id,
            state.store.descriptions(),
            &locale,
            &self.config.default_locale,
            exact,
        )
        .cloned()
    }

    // =========================================================================
    // Retirement and answers
    // =========================================================================

    pub fn retire(&self, reason: &str) {
        let mut details = self.details.write().unwrap_or_else(PoisonError::into_inner);
        details.retired = true;
        details.retire_reason = Some(reason.to_string());
        details.date_retired = Some(Utc::now());
        debug!(concept_id = %self.id, reason, "Concept retired");
    }

    pub fn unretire(&self) {
        let mut details = self.details.write().unwrap_or_else(PoisonError::into_inner);
        details.retired = false;
        details.retire_reason = None;
        details.date_retired = None;
    }

    pub fn is_retired(&self) -> bool {
        self.details
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .retired
    }

    pub fn retire_reason(&self) -> Option<String> {
        self.details
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .retire_reason
            .clone()
    }

    /// Add an answer concept. Returns false if it is already an answer.
    pub fn add_answer(&self, answer: Arc<Concept>) -> bool {
        let mut details = self.details.write().unwrap_or_else(PoisonError::into_inner);
        if details.answers.iter().any(|a| a.id == answer.id) {
            return false;
        }
        details.answers.push(answer);
        true
    }

    pub fn remove_answer(&self, answer_id: ConceptId) -> bool {
        let mut details = self.details.write().unwrap_or_else(PoisonError::into_inner);
        let before = details.answers.len();
        details.answers.retain(|a| a.id != answer_id);
        details.answers.len() != before
    }

    /// Answer concepts in insertion order; retired answers only when asked
    pub fn get_answers(&self, include_retired: bool) -> Vec<Arc<Concept>> {
        let answers = self
            .details
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .answers
            .clone();
        answers
            .into_iter()
            .filter(|a| include_retired || !a.is_retired())
            .collect()
    }

    /// Non-retired answers ordered by their name in the locale, then by id
    pub fn get_sorted_answers(&self, locale: Option<&Locale>) -> Vec<Arc<Concept>> {
        let locale = self.resolve_locale(locale);
        // Answers are cloned out first so no lock on self is held while the
        // answer concepts' own locks are taken.
        let mut answers = self.get_answers(false);
        answers.sort_by_cached_key(|a| {
            let name = a.get_name(Some(&locale)).map(|n| n.name).unwrap_or_default();
            (name, a.id)
        });
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::FixedLocaleSource;

    fn concept() -> Concept {
        Concept::new(5089, ConceptKind::Coded)
    }

    #[test]
    fn add_name_sets_owner_and_clears_cache() {
        let c = concept();
        c.add_name(NameCandidate::new("Fever", Locale::english()));
        c.get_compatible_names(Some(&Locale::uk()));
        assert_eq!(c.cached_locale_count(), 1);

        c.add_name(NameCandidate::new("Pyrexia", Locale::uk()));
        assert_eq!(c.cached_locale_count(), 0);
        let names = c.get_compatible_names(Some(&Locale::uk()));
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| n.concept_id == Some(ConceptId::new(5089))));
    }

    #[test]
    fn designation_clears_cache() {
        let c = concept();
        c.add_name(NameCandidate::new("Fever", Locale::english()));
        c.get_best_name(Some(&Locale::uk()));
        assert_eq!(c.cached_locale_count(), 1);
        c.set_preferred_name(&Locale::english(), NameCandidate::new("Fever", Locale::english()))
            .unwrap();
        assert_eq!(c.cached_locale_count(), 0);
    }

    #[test]
    fn blank_designation_is_rejected() {
        let c = concept();
        let err = c
            .set_preferred_name(&Locale::english(), NameCandidate::new("  ", Locale::english()))
            .unwrap_err();
        assert!(matches!(err, ConceptError::InvalidInput(_)));
        assert!(c.get_names(true).is_empty());
    }

    #[test]
    fn designate_unknown_id_is_not_found() {
        let c = concept();
        let err = c
            .set_short_name_by_id(&Locale::english(), NameId::new())
            .unwrap_err();
        assert!(matches!(err, ConceptError::NotFound(_)));
    }

    #[test]
    fn none_locale_uses_locale_source() {
        let c = concept().with_locale_source(Arc::new(FixedLocaleSource(Locale::new("es"))));
        c.add_name(NameCandidate::new("Fever", Locale::english()));
        c.add_name(NameCandidate::new("Fiebre", Locale::new("es")));
        assert_eq!(c.get_best_name(None).unwrap().name, "Fiebre");
        assert_eq!(c.display_string(), "Fiebre");
    }

    #[test]
    fn display_string_falls_back_to_id() {
        assert_eq!(concept().display_string(), "5089");
    }

    #[test]
    fn void_hides_name_from_resolution_but_keeps_it() {
        let c = concept();
        let name = NameCandidate::new("Fever", Locale::english());
        let id = name.id;
        c.add_name(name);

        assert!(c.void_name(id, "misspelt"));
        assert!(c.get_best_name(Some(&Locale::english())).is_none());
        assert_eq!(c.get_names(true).len(), 1);
        assert!(c.name_by_id(id).unwrap().voided);

        assert!(c.unvoid_name(id));
        assert_eq!(c.get_best_name(Some(&Locale::english())).unwrap().id, id);
        assert!(!c.void_name(NameId::new(), "missing"));
    }

    #[test]
    fn unvoided_name_does_not_reclaim_moved_designation() {
        let c = concept();
        let uk = Locale::uk();
        let x = c.set_preferred_name(&uk, NameCandidate::new("X", uk.clone())).unwrap();
        c.void_name(x, "superseded");
        let y = c.set_preferred_name(&uk, NameCandidate::new("Y", uk.clone())).unwrap();
        c.get_best_name(Some(&uk));

        assert!(c.unvoid_name(x));

        let tag = DesignationTag::preferred_country("GB");
        let holders: Vec<_> = c
            .get_names(false)
            .into_iter()
            .filter(|n| n.has_tag(&tag))
            .map(|n| n.id)
            .collect();
        assert_eq!(holders, vec![y]);
        assert_eq!(c.get_best_name(Some(&uk)).unwrap().id, y);
        assert!(c.name_by_id(x).unwrap().tags().is_empty());
    }

    #[test]
    fn added_name_cannot_take_a_held_designation() {
        let c = concept();
        let en = Locale::english();
        let fever = c.set_preferred_name(&en, NameCandidate::new("Fever", en.clone())).unwrap();
        c.add_name(
            NameCandidate::new("Pyrexia", en.clone())
                .with_tag(DesignationTag::preferred_language("en"))
                .with_tag(DesignationTag::Synonym),
        );

        assert_eq!(c.get_preferred_name_in_language("en").unwrap().id, fever);
        let pyrexia = c.get_name_known_as("Pyrexia", &en).unwrap();
        assert_eq!(pyrexia.tags(), &[DesignationTag::Synonym]);
    }

    #[test]
    fn over_long_language_designation_is_visible_to_its_key() {
        let c = concept();
        c.add_name(NameCandidate::new("Other", Locale::english()));
        let eng = Locale::new("eng");
        let fever = c.set_preferred_name(&eng, NameCandidate::new("Fever", eng.clone())).unwrap();

        let compatible: Vec<_> = c
            .get_compatible_names(Some(&Locale::english()))
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(compatible, vec!["Other", "Fever"]);
        assert_eq!(c.get_preferred_name_in_language("en").unwrap().id, fever);
        assert_eq!(c.get_preferred_name(Some(&Locale::english())).unwrap().id, fever);
        assert_eq!(c.get_best_name(Some(&Locale::uk())).unwrap().id, fever);
    }

    #[test]
    fn synonyms_match_language() {
        let c = concept();
        c.add_name(NameCandidate::new("Fever", Locale::english()));
        c.add_name(NameCandidate::new("Pyrexia", Locale::uk()).with_tag(DesignationTag::Synonym));
        c.add_name(NameCandidate::new("Calentura", Locale::new("es")).with_tag(DesignationTag::Synonym));
        let synonyms = c.get_synonyms(&Locale::us());
        assert_eq!(synonyms.len(), 1);
        assert_eq!(synonyms[0].name, "Pyrexia");
    }

    #[test]
    fn has_name_scopes() {
        let c = concept();
        c.add_name(NameCandidate::new("Pyrexia", Locale::uk()));
        assert!(c.has_name("Pyrexia", None));
        assert!(c.has_name("Pyrexia", Some(&Locale::uk())));
        assert!(!c.has_name("Pyrexia", Some(&Locale::english())));
        assert!(c.is_named("Pyrexia"));
        assert!(!c.is_named("Fever"));
    }

    #[test]
    fn sorted_answers_skip_retired_and_order_by_name() {
        let question = Concept::new(1, ConceptKind::Coded);
        let yes = Arc::new(Concept::new(3, ConceptKind::NotApplicable));
        yes.add_name(NameCandidate::new("Yes", Locale::english()));
        let no = Arc::new(Concept::new(2, ConceptKind::NotApplicable));
        no.add_name(NameCandidate::new("No", Locale::english()));
        let unknown = Arc::new(Concept::new(4, ConceptKind::NotApplicable));
        unknown.add_name(NameCandidate::new("Unknown", Locale::english()));
        unknown.retire("replaced");

        assert!(question.add_answer(Arc::clone(&yes)));
        assert!(!question.add_answer(Arc::clone(&yes)));
        question.add_answer(Arc::clone(&unknown));
        question.add_answer(Arc::clone(&no));

        let sorted: Vec<_> = question
            .get_sorted_answers(Some(&Locale::english()))
            .iter()
            .map(|a| a.display_string())
            .collect();
        assert_eq!(sorted, vec!["No", "Yes"]);
        assert_eq!(question.get_answers(true).len(), 3);

        assert!(question.remove_answer(ConceptId::new(2)));
        assert!(!question.remove_answer(ConceptId::new(2)));
    }

    #[test]
    fn retirement_round_trip() {
        let c = concept();
        c.retire("duplicate");
        assert!(c.is_retired());
        assert_eq!(c.retire_reason().as_deref(), Some("duplicate"));
        c.unretire();
        assert!(!c.is_retired());
    }
}
