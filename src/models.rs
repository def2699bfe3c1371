//! Listing Models
//!
//! Data structures persisted to browser storage, plus draft validation
//! for the posting form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Image used when a listing is posted without a photo
pub const PLACEHOLDER_IMG: &str = "assets/placeholder.svg";

/// Categories offered by the search select and the posting form
pub const CATEGORIES: &[&str] = &[
    "Furniture",
    "Books",
    "Kitchen",
    "Clothing",
    "Electronics",
    "Other",
];

/// How an item changes hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    /// Given away, no strings attached
    #[default]
    Free,
    /// Donated to whoever needs it
    Donate,
    /// Swapped for something else
    Swap,
}

impl ListingKind {
    pub const ALL: [ListingKind; 3] = [ListingKind::Free, ListingKind::Donate, ListingKind::Swap];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Free => "free",
            ListingKind::Donate => "donate",
            ListingKind::Swap => "swap",
        }
    }

    /// Capitalized form for badges and tab labels
    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::Free => "Free",
            ListingKind::Donate => "Donate",
            ListingKind::Swap => "Swap",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free" => Some(ListingKind::Free),
            "donate" => Some(ListingKind::Donate),
            "swap" => Some(ListingKind::Swap),
            _ => None,
        }
    }
}

/// A posted item
///
/// The JSON field names are the stored schema; `kind` is persisted as `type`
/// and a missing `desc` decodes to an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier, stable identity used by bookmarks
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    /// Postal-code-like token, accepted as free text
    pub location: String,
    #[serde(default)]
    pub desc: String,
    /// Placeholder asset path or an inline data: URL
    pub img: String,
    /// Creation time in epoch milliseconds
    pub ts: i64,
}

/// Display counters, bumped on every post and never recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Stats {
    pub items: u32,
    pub people: u32,
    pub co2: u32,
}

impl Stats {
    /// Fixed heuristic per post: one item, one person reached,
    /// roughly 5 kg of CO2 kept out of the waste stream
    pub fn record_post(&mut self) {
        self.items += 1;
        self.people += 1;
        self.co2 += 5;
    }
}

/// Required fields of the posting form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Category,
    Kind,
    Location,
}

impl ListingField {
    pub fn label(&self) -> &'static str {
        match self {
            ListingField::Title => "title",
            ListingField::Category => "category",
            ListingField::Kind => "type",
            ListingField::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty (after trimming) or unrecognized
    Missing(ListingField),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing(field) => {
                write!(f, "Please fill the required {} field.", field.label())
            }
        }
    }
}

/// Raw posting-form contents, as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub category: String,
    pub kind: String,
    pub location: String,
    pub desc: String,
}

impl ListingDraft {
    /// Check the required fields without consuming the draft
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.parsed_kind().map(|_| ())
    }

    /// Turn the draft into a well-formed listing, trimming every field
    pub fn into_listing(self, id: String, img: String, ts: i64) -> Result<Listing, ValidationError> {
        let kind = self.parsed_kind()?;
        Ok(Listing {
            id,
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            kind,
            location: self.location.trim().to_string(),
            desc: self.desc.trim().to_string(),
            img,
            ts,
        })
    }

    /// Required-field checks in form order; the kind must also parse
    fn parsed_kind(&self) -> Result<ListingKind, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Missing(ListingField::Title));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::Missing(ListingField::Category));
        }
        let kind = ListingKind::parse(self.kind.trim())
            .ok_or(ValidationError::Missing(ListingField::Kind))?;
        if self.location.trim().is_empty() {
            return Err(ValidationError::Missing(ListingField::Location));
        }
        Ok(kind)
    }
}
