//! Locale compatibility cache.
//!
//! Memoizes, per requested locale, the positions of the non-voided names
//! compatible with it. Entries are positions into the candidate store, which
//! is valid only because every name mutation clears the whole cache.
//!
//! The cache is owned by the concept's naming state and sits behind the same
//! `RwLock` as the store:
//! - `clear` takes `&mut self`, so it can only run under the write lock, in
//!   the same critical section as the mutation it follows.
//! - `get_or_build` runs under the read lock. The inner mutex only serializes
//!   readers racing to fill the same map; a list is built in full before it
//!   is inserted, so no reader sees a partial entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::trace;

use super::store::CandidateStore;
use crate::locale::Locale;

#[derive(Debug, Default)]
pub(crate) struct CompatibilityCache {
    entries: Mutex<HashMap<Locale, Arc<[usize]>>>,
}

impl CompatibilityCache {
    /// Cached compatible positions for `locale`, building them on a miss
    pub fn get_or_build(&self, locale: &Locale, store: &CandidateStore) -> Arc<[usize]> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = entries.get(locale) {
            return Arc::clone(hit);
        }

        let built: Arc<[usize]> = store.compatible_positions(locale).into();
        trace!(%locale, compatible = built.len(), "Built compatible-name cache entry");
        entries.insert(locale.clone(), Arc::clone(&built));
        built
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of locales currently cached
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
