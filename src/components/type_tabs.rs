//! Type Tab Bar Component
//!
//! Mutually exclusive tabs selecting a listing kind, with a catch-all.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filter::KindTab;
use crate::models::ListingKind;

/// Tab options in display order
const TABS: &[(KindTab, &str)] = &[
    (KindTab::All, "All"),
    (KindTab::Only(ListingKind::Free), "Free"),
    (KindTab::Only(ListingKind::Donate), "Donate"),
    (KindTab::Only(ListingKind::Swap), "Swap"),
];

#[component]
pub fn TypeTabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="tabs">
            {TABS.iter().map(|&(tab, label)| {
                let is_active = move || ctx.query.with(|state| state.tab == tab);
                view! {
                    <button
                        class=move || if is_active() { "tab is-active" } else { "tab" }
                        on:click=move |_| ctx.select_tab(tab)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
