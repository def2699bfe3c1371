//! Listing Filters
//!
//! Pure predicate combining the search box, category/location inputs and the
//! type tabs. Criteria are ANDed; an empty criterion never rejects.

use crate::models::{Listing, ListingKind};

/// Which listing kinds the tab bar admits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindTab {
    #[default]
    All,
    Only(ListingKind),
}

/// Filter criteria as currently applied to the grid
///
/// Session-only: reset by a page reload, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub q: String,
    pub category: String,
    pub location: String,
    pub tab: KindTab,
    pub only_nearby: bool,
}

/// True when `listing` survives every criterion in `query`
pub fn passes(listing: &Listing, query: &QueryState) -> bool {
    if let KindTab::Only(kind) = query.tab {
        if listing.kind != kind {
            return false;
        }
    }

    let q = query.q.trim().to_lowercase();
    if !q.is_empty() {
        let hay = format!("{} {} {}", listing.title, listing.desc, listing.category).to_lowercase();
        if !hay.contains(&q) {
            return false;
        }
    }

    if !query.category.is_empty() && listing.category != query.category {
        return false;
    }

    let loc = query.location.trim();
    if !loc.is_empty() {
        if query.only_nearby {
            // Pincode-style nearby match: prefix (covers exact equality)
            if !listing.location.starts_with(loc) {
                return false;
            }
        } else if !listing.location.contains(loc) {
            return false;
        }
    }

    true
}

/// Listings as the grid shows them: filtered by `query`, newest first
pub fn visible_listings(listings: &[Listing], query: &QueryState) -> Vec<Listing> {
    let mut visible: Vec<Listing> = listings
        .iter()
        .filter(|listing| passes(listing, query))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.ts.cmp(&a.ts));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(id: &str, ts: i64) -> Listing {
        Listing {
            id: id.to_string(),
            title: "Wooden study chair".to_string(),
            category: "Furniture".to_string(),
            kind: ListingKind::Free,
            location: "600042".to_string(),
            desc: "Good condition. Pickup near metro.".to_string(),
            img: "assets/placeholder.svg".to_string(),
            ts,
        }
    }

    #[test]
    fn test_default_query_passes_everything() {
        assert!(passes(&make_listing("a", 0), &QueryState::default()));
    }

    #[test]
    fn test_tab_clause() {
        let listing = make_listing("a", 0);
        let mut query = QueryState::default();

        query.tab = KindTab::Only(ListingKind::Free);
        assert!(passes(&listing, &query));

        query.tab = KindTab::Only(ListingKind::Swap);
        assert!(!passes(&listing, &query));
    }

    #[test]
    fn test_text_clause_searches_title_desc_and_category() {
        let listing = make_listing("a", 0);
        let mut query = QueryState::default();

        query.q = "CHAIR".to_string();
        assert!(passes(&listing, &query), "title, case-folded");

        query.q = "metro".to_string();
        assert!(passes(&listing, &query), "description");

        query.q = "furn".to_string();
        assert!(passes(&listing, &query), "category");

        query.q = "bicycle".to_string();
        assert!(!passes(&listing, &query));

        // Whitespace-only text is no criterion at all
        query.q = "   ".to_string();
        assert!(passes(&listing, &query));
    }

    #[test]
    fn test_category_clause_is_exact() {
        let listing = make_listing("a", 0);
        let mut query = QueryState::default();

        query.category = "Furniture".to_string();
        assert!(passes(&listing, &query));

        query.category = "Furn".to_string();
        assert!(!passes(&listing, &query), "no prefix matching on category");
    }

    #[test]
    fn test_location_substring_vs_nearby_prefix() {
        let listing = make_listing("a", 0);
        let mut query = QueryState::default();

        // Default mode: substring anywhere
        query.location = "0042".to_string();
        assert!(passes(&listing, &query));

        // Nearby mode: must be a prefix
        query.only_nearby = true;
        assert!(!passes(&listing, &query));

        query.location = "6000".to_string();
        assert!(passes(&listing, &query));

        query.location = "600042".to_string();
        assert!(passes(&listing, &query), "exact match counts as nearby");
    }

    #[test]
    fn test_clauses_are_conjunctive() {
        let listing = make_listing("a", 0);
        let query = QueryState {
            q: "chair".to_string(),
            category: "Furniture".to_string(),
            location: "600042".to_string(),
            tab: KindTab::Only(ListingKind::Free),
            only_nearby: true,
        };
        assert!(passes(&listing, &query));

        // One failing clause rejects, however many others pass
        let mut failing = query.clone();
        failing.category = "Books".to_string();
        assert!(!passes(&listing, &failing));
    }

    #[test]
    fn test_visible_listings_sorts_newest_first() {
        let listings = vec![
            make_listing("old", 10),
            make_listing("newest", 300),
            make_listing("mid", 200),
        ];
        let visible = visible_listings(&listings, &QueryState::default());
        let ids: Vec<&str> = visible.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["newest", "mid", "old"]);
        assert!(visible.windows(2).all(|w| w[0].ts >= w[1].ts));
    }

    #[test]
    fn test_visible_listings_filters_before_sorting() {
        let mut swap = make_listing("swap", 500);
        swap.kind = ListingKind::Swap;
        let listings = vec![swap, make_listing("free", 100)];

        let query = QueryState {
            tab: KindTab::Only(ListingKind::Free),
            ..QueryState::default()
        };
        let visible = visible_listings(&listings, &query);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "free");
    }
}
