//! Bookmarks Modal Component
//!
//! Dialog showing only bookmarked listings. A bookmark whose listing no
//! longer decodes from storage simply matches nothing.

use leptos::html;
use leptos::prelude::*;

use crate::components::ListingCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BookmarksModal(dialog_ref: NodeRef<html::Dialog>) -> impl IntoView {
    let store = use_app_store();

    let bookmarked = Memo::new(move |_| {
        store.bookmarks().with(|ids| {
            store.listings().with(|listings| {
                listings
                    .iter()
                    .filter(|listing| ids.contains(&listing.id))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    let close = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref>
            <header class="modal__head">
                <h3>"Your bookmarks"</h3>
                <button class="icon-btn" on:click=close>"✕"</button>
            </header>
            <Show
                when=move || !bookmarked.get().is_empty()
                fallback=|| view! { <div class="empty"><p>"No bookmarks yet."</p></div> }
            >
                <div class="grid">
                    <For
                        each=move || bookmarked.get()
                        key=|listing| listing.id.clone()
                        children=move |listing| view! { <ListingCard listing=listing/> }
                    />
                </div>
            </Show>
        </dialog>
    }
}
