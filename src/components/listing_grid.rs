//! Listing Grid Component
//!
//! Newest-first feed of cards surviving the active filters, with an
//! empty state when nothing survives.

use leptos::prelude::*;

use crate::components::ListingCard;
use crate::context::AppContext;
use crate::filter::visible_listings;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListingGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        ctx.query.with(|query| {
            store.listings().with(|listings| visible_listings(listings, query))
        })
    });

    view! {
        <Show
            when=move || !visible.get().is_empty()
            fallback=|| view! {
                <div class="empty">
                    <p>"Nothing here yet. Widen your filters, or post the first item."</p>
                </div>
            }
        >
            <div class="grid">
                <For
                    each=move || visible.get()
                    key=|listing| listing.id.clone()
                    children=move |listing| view! { <ListingCard listing=listing/> }
                />
            </div>
        </Show>
    }
}
