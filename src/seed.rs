//! First-Run Sample Data
//!
//! Populates storage with a handful of listings so the board is not empty on
//! a fresh profile.

use crate::models::{Listing, ListingKind, Stats, PLACEHOLDER_IMG};
use crate::storage::{self, BOOKMARKS_KEY, LISTINGS_KEY, STATS_KEY};

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Counters shown on a fresh profile, matching the sample listings
pub fn sample_stats() -> Stats {
    Stats { items: 5, people: 5, co2: 36 }
}

/// Sample listings, aged a few hours to a few days relative to `now_ms`
pub fn sample_listings(now_ms: i64) -> Vec<Listing> {
    let sample = |id: &str, title: &str, category: &str, kind, location: &str, desc: &str, age_hours: i64| Listing {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        kind,
        location: location.to_string(),
        desc: desc.to_string(),
        img: PLACEHOLDER_IMG.to_string(),
        ts: now_ms - age_hours * HOUR_MS,
    };

    vec![
        sample(
            "seed-chair",
            "Wooden study chair",
            "Furniture",
            ListingKind::Free,
            "600042",
            "Good condition. Pickup near metro. DM in description.",
            6,
        ),
        sample(
            "seed-books",
            "Physics books set (XI-XII)",
            "Books",
            ListingKind::Donate,
            "560001",
            "Complete set, lightly used.",
            30,
        ),
        sample(
            "seed-mixer",
            "Mixer jar (needs blade)",
            "Kitchen",
            ListingKind::Swap,
            "600040",
            "Swap for any stainless bottle.",
            54,
        ),
        sample(
            "seed-shirts",
            "Old T-shirts for crafts",
            "Clothing",
            ListingKind::Free,
            "400001",
            "Great for rags or DIY.",
            80,
        ),
        sample(
            "seed-keyboard",
            "USB keyboard",
            "Electronics",
            ListingKind::Free,
            "641001",
            "Fully working. Pickup weekends.",
            100,
        ),
    ]
}

/// Populate storage on first run
///
/// A readable listings record skips seeding entirely, so later startups
/// preserve whatever the user has posted or bookmarked since. An absent or
/// unreadable record is treated as a fresh profile.
pub fn ensure_seed(now_ms: i64) {
    if matches!(storage::load::<Vec<Listing>>(LISTINGS_KEY), Ok(Some(_))) {
        return;
    }
    storage::persist(LISTINGS_KEY, &sample_listings(now_ms));
    storage::persist(BOOKMARKS_KEY, &Vec::<String>::new());
    storage::persist(STATS_KEY, &sample_stats());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_listings_shape() {
        let now = 1_000 * HOUR_MS;
        let listings = sample_listings(now);
        assert_eq!(listings.len(), 5);

        let ids: HashSet<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), 5, "ids are unique");

        for listing in &listings {
            assert!(listing.ts < now);
            assert!(!listing.title.is_empty());
            assert!(!listing.location.is_empty());
            assert_eq!(listing.img, PLACEHOLDER_IMG);
        }
    }

    #[test]
    fn test_sample_listings_span_all_kinds() {
        let kinds: HashSet<ListingKind> =
            sample_listings(0).iter().map(|l| l.kind).collect();
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn test_sample_stats() {
        assert_eq!(sample_stats(), Stats { items: 5, people: 5, co2: 36 });
    }
}
