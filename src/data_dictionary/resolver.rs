//! Name and description resolution
//!
//! Every name resolver scans the locale-compatible names in stored order and
//! either returns an immediate winner (an explicit designation for exactly
//! what was asked) or keeps a ranked running best. Within a rank the first
//! name encountered wins, so results are deterministic for a given store.
//!
//! | Resolver | Immediate win | Running best (high → low) | Fallback |
//! |----------|---------------|---------------------------|----------|
//! | `name` | exact locale + PREFERRED; country tag, else language tag when no country | language tag, PREFERRED, any | first active name (not when `exact`) |
//! | `preferred_name` | as `name` | language tag, PREFERRED | none |
//! | `best_name` | as `name` | as `name` | single compatible name; first active name |
//! | `best_short_name` | short country tag; short language tag or SHORT when no country | short language tag, SHORT, any | single compatible name; first active name |
//!
//! Absence is never an error: resolvers return `None` and log why.

use tracing::{debug, error, info, warn};

use super::candidate::{DescriptionCandidate, NameCandidate};
use super::ids::ConceptId;
use super::store::CandidateStore;
use super::tags::{DesignationPurpose, DesignationTag, ScopedTags};
use crate::locale::{are_compatible, Locale};

// =============================================================================
// Running match
// =============================================================================

/// Best candidate seen so far, ranked. A later candidate replaces the current
/// one only with a strictly higher rank.
struct RunningMatch<'a> {
    best: Option<(&'a NameCandidate, u8)>,
}

impl<'a> RunningMatch<'a> {
    const ANY: u8 = 1;
    const GENERIC: u8 = 2;
    const LANGUAGE: u8 = 3;

    fn new() -> Self {
        Self { best: None }
    }

    fn offer(&mut self, candidate: &'a NameCandidate, rank: u8) {
        match self.best {
            Some((_, current)) if current >= rank => {}
            _ => self.best = Some((candidate, rank)),
        }
    }

    fn into_inner(self) -> Option<&'a NameCandidate> {
        self.best.map(|(candidate, _)| candidate)
    }
}

/// Outcome of one tiered scan
enum Scan<'a> {
    /// Explicit designation for the requested locale
    Exact(&'a NameCandidate),
    /// Best non-immediate candidate (if any)
    Running(Option<&'a NameCandidate>),
}

// =============================================================================
// Name resolver
// =============================================================================

/// Resolves names for one locale against a borrowed candidate store.
///
/// `compatible` is the cached, ordered list of active names compatible with
/// `locale`.
pub(crate) struct NameResolver<'a> {
    concept_id: ConceptId,
    store: &'a CandidateStore,
    compatible: Vec<&'a NameCandidate>,
    locale: &'a Locale,
}

impl<'a> NameResolver<'a> {
    pub fn new(
        concept_id: ConceptId,
        store: &'a CandidateStore,
        compatible: Vec<&'a NameCandidate>,
        locale: &'a Locale,
    ) -> Self {
        Self {
            concept_id,
            store,
            compatible,
            locale,
        }
    }

    fn has_no_names(&self) -> bool {
        if self.store.active_count() == 0 {
            debug!(concept_id = %self.concept_id, "There are no names defined");
            return true;
        }
        false
    }

    fn is_exact_preferred(&self, candidate: &NameCandidate) -> bool {
        candidate.locale == *self.locale && candidate.is_preferred()
    }

    /// The tiered scan shared by `name` and `best_name`
    fn scan_preferred(&self) -> Scan<'a> {
        let tags = DesignationPurpose::Preferred.scoped_tags(self.locale);
        let mut running = RunningMatch::new();

        for &candidate in &self.compatible {
            if self.is_exact_preferred(candidate) {
                return Scan::Exact(candidate);
            }
            match &tags.country {
                Some(country_tag) => {
                    if candidate.has_tag(country_tag) {
                        return Scan::Exact(candidate);
                    }
                    running.offer(candidate, rank_preferred(candidate, &tags));
                }
                None => {
                    if candidate.has_tag(&tags.language) {
                        return Scan::Exact(candidate);
                    }
                    running.offer(candidate, rank_preferred(candidate, &tags));
                }
            }
        }

        Scan::Running(running.into_inner())
    }

    /// Name for the locale. With `exact`, only an explicit designation for
    /// the locale qualifies; otherwise fall back to the best compatible name
    /// and finally to any active name.
    pub fn name(&self, exact: bool) -> Option<&'a NameCandidate> {
        if self.has_no_names() {
            return None;
        }
        debug!(concept_id = %self.concept_id, locale = %self.locale, "Getting concept name");

        let best = match self.scan_preferred() {
            Scan::Exact(found) => return Some(found),
            Scan::Running(best) => best,
        };

        if exact {
            warn!(
                concept_id = %self.concept_id,
                locale = %self.locale,
                "No concept name found for exact locale"
            );
            return None;
        }
        if best.is_some() {
            return best;
        }

        info!(
            concept_id = %self.concept_id,
            locale = %self.locale,
            "No compatible concept name found, using first available name"
        );
        let fallback = self.store.first_active();
        if fallback.is_none() {
            error!(concept_id = %self.concept_id, "No concept names exist");
        }
        fallback
    }

    /// Name explicitly designated as preferred for the locale. Never falls
    /// back to undesignated names.
    pub fn preferred_name(&self) -> Option<&'a NameCandidate> {
        if self.has_no_names() {
            return None;
        }
        debug!(
            concept_id = %self.concept_id,
            locale = %self.locale,
            "Getting preferred concept name"
        );

        let tags = DesignationPurpose::Preferred.scoped_tags(self.locale);
        let mut running = RunningMatch::new();

        for &candidate in &self.compatible {
            if self.is_exact_preferred(candidate) {
                return Some(candidate);
            }
            match &tags.country {
                Some(country_tag) if candidate.has_tag(country_tag) => return Some(candidate),
                None if candidate.has_tag(&tags.language) => return Some(candidate),
                _ => {}
            }
            if candidate.has_tag(&tags.language) {
                running.offer(candidate, RunningMatch::LANGUAGE);
            } else if candidate.is_preferred() {
                running.offer(candidate, RunningMatch::GENERIC);
            }
        }

        let preferred = running.into_inner();
        if preferred.is_none() {
            debug!(
                concept_id = %self.concept_id,
                locale = %self.locale,
                "No preferred concept name found"
            );
        }
        preferred
    }

    /// Best compatible name; total whenever the concept has an active name
    pub fn best_name(&self) -> Option<&'a NameCandidate> {
        if self.has_no_names() {
            return None;
        }
        debug!(concept_id = %self.concept_id, locale = %self.locale, "Getting best concept name");

        let best = match self.compatible.as_slice() {
            [] => self.store.first_active(),
            [only] => Some(*only),
            _ => match self.scan_preferred() {
                Scan::Exact(found) => Some(found),
                Scan::Running(best) => best,
            },
        };

        if best.is_none() {
            warn!(concept_id = %self.concept_id, "No compatible concept name found");
        }
        best
    }

    /// Best compatible short name, using the short designations
    pub fn best_short_name(&self) -> Option<&'a NameCandidate> {
        if self.has_no_names() {
            return None;
        }
        debug!(
            concept_id = %self.concept_id,
            locale = %self.locale,
            "Getting best short concept name"
        );

        let best = match self.compatible.as_slice() {
            [] => self.store.first_active(),
            [only] => Some(*only),
            _ => self.scan_short(),
        };

        if best.is_none() {
            warn!(concept_id = %self.concept_id, "No compatible short concept name found");
        }
        best
    }

    fn scan_short(&self) -> Option<&'a NameCandidate> {
        let tags = DesignationPurpose::Short.scoped_tags(self.locale);
        let mut running = RunningMatch::new();

        for &candidate in &self.compatible {
            match &tags.country {
                Some(country_tag) => {
                    if candidate.has_tag(country_tag) {
                        return Some(candidate);
                    }
                    running.offer(candidate, rank_short(candidate, &tags));
                }
                None => {
                    if candidate.has_tag(&tags.language) || candidate.is_short() {
                        return Some(candidate);
                    }
                    running.offer(candidate, RunningMatch::ANY);
                }
            }
        }

        running.into_inner()
    }

    /// Name tagged short for the locale's country (or language when it has
    /// no country), else the first compatible name tagged SHORT.
    pub fn short_name_in_locale(&self) -> Option<&'a NameCandidate> {
        let tag = match self.locale.country() {
            Some(country) => DesignationTag::short_country(country),
            None => DesignationTag::short_language(self.locale.language()),
        };
        self.store
            .find_tagged(&tag)
            .or_else(|| self.compatible.iter().copied().find(|n| n.is_short()))
    }
}

fn rank_preferred(candidate: &NameCandidate, tags: &ScopedTags) -> u8 {
    if candidate.has_tag(&tags.language) {
        RunningMatch::LANGUAGE
    } else if candidate.is_preferred() {
        RunningMatch::GENERIC
    } else {
        RunningMatch::ANY
    }
}

fn rank_short(candidate: &NameCandidate, tags: &ScopedTags) -> u8 {
    if candidate.has_tag(&tags.language) {
        RunningMatch::LANGUAGE
    } else if candidate.is_short() {
        RunningMatch::GENERIC
    } else {
        RunningMatch::ANY
    }
}

// =============================================================================
// Locale-blind and description resolution
// =============================================================================

/// Shortest active name by character count, first encountered on ties.
///
/// The scan ignores `locale` entirely, and with `exact` nothing ever counts
/// as found for the locale, so the result is always `None`. Callers relying
/// on this shape depend on it staying locale-blind.
pub(crate) fn shortest_name<'a>(
    concept_id: ConceptId,
    store: &'a CandidateStore,
    locale: &Locale,
    exact: bool,
) -> Option<&'a NameCandidate> {
    debug!(%concept_id, %locale, "Getting shortest concept name");

    let mut shortest: Option<&NameCandidate> = None;
    for candidate in store.active_names() {
        if shortest.map_or(true, |s| candidate.char_len() < s.char_len()) {
            shortest = Some(candidate);
        }
    }

    if exact {
        warn!(%concept_id, %locale, "No short concept name found for exact locale");
        return None;
    }
    if shortest.is_none() {
        warn!(%concept_id, "No concept name found for default locale");
    }
    shortest
}

/// Description for the locale: exact locale first, then (unless `exact`) the
/// first compatible description, then the description in `default_locale`.
pub(crate) fn description<'a>(
    concept_id: ConceptId,
    descriptions: &'a [DescriptionCandidate],
    locale: &Locale,
    default_locale: &Locale,
    exact: bool,
) -> Option<&'a DescriptionCandidate> {
    debug!(%concept_id, %locale, "Getting concept description");

    let mut compatible = None;
    let mut default = None;

    for available in descriptions {
        if available.locale == *locale {
            return Some(available);
        }
        if !exact && compatible.is_none() && are_compatible(&available.locale, locale) {
            compatible = Some(available);
        }
        if default.is_none() && available.locale == *default_locale {
            default = Some(available);
        }
    }

    if exact {
        debug!(%concept_id, %locale, "No concept description found for exact locale");
        return None;
    }
    if compatible.is_some() {
        return compatible;
    }
    if default.is_none() {
        debug!(%concept_id, %default_locale, "No concept description found for default locale");
    }
    default
}
