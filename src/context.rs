//! Application Context
//!
//! Query state shared between the search controls, tab bar and grid,
//! provided via the Leptos Context API.

use leptos::prelude::*;

use crate::filter::{KindTab, QueryState};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Filter criteria currently applied to the grid
    pub query: RwSignal<QueryState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(QueryState::default()),
        }
    }

    /// Search trigger: apply the text and location inputs (and whatever
    /// category was staged earlier) in one notification
    pub fn apply_search(&self, q: String, location: String) {
        self.query.update(|state| {
            state.q = q;
            state.location = location;
        });
    }

    /// Stage a category without re-filtering the grid; it takes effect on
    /// the next notifying change
    pub fn stage_category(&self, category: String) {
        self.query.update_untracked(|state| state.category = category);
    }

    /// Select a type tab
    pub fn select_tab(&self, tab: KindTab) {
        self.query.update(|state| state.tab = tab);
    }

    /// Toggle nearby-only location matching
    pub fn set_only_nearby(&self, only_nearby: bool) {
        self.query.update(|state| state.only_nearby = only_nearby);
    }
}
