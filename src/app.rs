//! Application Shell
//!
//! Seeds storage on first run, owns the store and query context, and lays
//! out the page: header, stats, search controls, tab bar, grid and the two
//! dialogs.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BookmarksModal, ListingGrid, PostForm, SearchBar, StatsBar, TypeTabs};
use crate::context::AppContext;
use crate::seed;
use crate::store::{AppState, AppStore};
use crate::timefmt::{current_year, now_ms};

#[component]
pub fn App() -> impl IntoView {
    seed::ensure_seed(now_ms());

    let store: AppStore = Store::new(AppState::load());
    provide_context(store);
    provide_context(AppContext::new());

    let post_dialog = NodeRef::<html::Dialog>::new();
    let bookmarks_dialog = NodeRef::<html::Dialog>::new();

    let open_post = move |_| {
        if let Some(dialog) = post_dialog.get() {
            let _ = dialog.show_modal();
        }
    };
    let open_bookmarks = move |_| {
        if let Some(dialog) = bookmarks_dialog.get() {
            let _ = dialog.show_modal();
        }
    };

    view! {
        <header class="topbar">
            <span class="brand">"ReLoop"</span>
            <nav>
                <button class="btn btn--ghost" on:click=open_bookmarks>"Bookmarks"</button>
                <button class="btn" on:click=open_post>"Post an item"</button>
            </nav>
        </header>

        <main>
            <StatsBar/>
            <SearchBar/>
            <TypeTabs/>
            <ListingGrid/>
        </main>

        <PostForm dialog_ref=post_dialog/>
        <BookmarksModal dialog_ref=bookmarks_dialog/>

        <footer>
            <small>{format!("© {} ReLoop · give it a second life", current_year())}</small>
        </footer>
    }
}
