//! Listing Card Component
//!
//! One card in the grid: photo, badges, title, relative age and the
//! bookmark toggle.

use leptos::prelude::*;

use crate::models::Listing;
use crate::store::{store_toggle_bookmark, use_app_store, AppStateStoreFields};
use crate::timefmt::{now_ms, time_ago};

#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    let store = use_app_store();

    let id = listing.id.clone();
    let bookmarked = Memo::new({
        let id = id.clone();
        move |_| store.bookmarks().with(|set| set.contains(&id))
    });

    // Age is computed when the card renders, like the rest of the card body
    let age = time_ago(now_ms(), listing.ts);

    view! {
        <article class="card">
            <img class="card__img" src=listing.img.clone() alt=listing.title.clone() loading="lazy"/>
            <div class="badges">
                <span class="badge badge--type">{listing.kind.label()}</span>
                <span class="badge">{listing.category.clone()}</span>
                <span class="badge">{format!("📍 {}", listing.location)}</span>
            </div>
            <h4>{listing.title.clone()}</h4>
            <p>{listing.desc.clone()}</p>
            <div class="card__foot">
                <small>{age}</small>
                <button
                    class="icon-btn bookmark"
                    title="Bookmark"
                    aria-pressed=move || if bookmarked.get() { "true" } else { "false" }
                    on:click=move |_| {
                        store_toggle_bookmark(&store, &id);
                    }
                >
                    "★"
                </button>
            </div>
        </article>
    }
}
