//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the in-memory mirrors of the three persisted records; every mutation here
//! writes the affected record back to browser storage as a whole document.

use leptos::prelude::*;
use reactive_stores::Store;
use std::collections::HashSet;

use crate::models::{Listing, Stats};
use crate::storage::{self, BOOKMARKS_KEY, LISTINGS_KEY, STATS_KEY};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every posted listing, in insertion order
    pub listings: Vec<Listing>,
    /// Ids of bookmarked listings
    pub bookmarks: HashSet<String>,
    /// Display counters, bumped on every post
    pub stats: Stats,
}

impl AppState {
    /// Rebuild state from browser storage
    pub fn load() -> Self {
        let bookmark_ids: Vec<String> = storage::load_or(BOOKMARKS_KEY, Vec::new());
        Self {
            listings: storage::load_or(LISTINGS_KEY, Vec::new()),
            bookmarks: bookmark_ids.into_iter().collect(),
            stats: storage::load_or(STATS_KEY, Stats::default()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a freshly posted listing and persist the collection
pub fn store_add_listing(store: &AppStore, listing: Listing) {
    store.listings().write().push(listing);
    storage::persist(LISTINGS_KEY, &store.listings().get_untracked());
}

/// Toggle bookmark membership for `id`; returns the new membership
pub fn store_toggle_bookmark(store: &AppStore, id: &str) -> bool {
    let bookmarked = toggle_membership(&mut *store.bookmarks().write(), id);
    let ids: Vec<String> = store.bookmarks().get_untracked().into_iter().collect();
    storage::persist(BOOKMARKS_KEY, &ids);
    bookmarked
}

/// Bump the display counters for a new post and persist them
pub fn store_record_post(store: &AppStore) {
    store.stats().write().record_post();
    storage::persist(STATS_KEY, &store.stats().get_untracked());
}

/// Flip `id` in or out of `set`; returns the resulting membership
fn toggle_membership(set: &mut HashSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = HashSet::new();
        assert!(toggle_membership(&mut set, "a1"));
        assert!(set.contains("a1"));
        assert!(!toggle_membership(&mut set, "a1"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let mut set: HashSet<String> = ["keep".to_string()].into_iter().collect();
        let before = set.clone();
        toggle_membership(&mut set, "other");
        toggle_membership(&mut set, "other");
        assert_eq!(set, before);
    }
}
