//! Stats Bar Component
//!
//! Read-only projection of the three display counters.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="stats">
            <div class="stat">
                <strong>{move || store.stats().get().items}</strong>
                <span>"items shared"</span>
            </div>
            <div class="stat">
                <strong>{move || store.stats().get().people}</strong>
                <span>"people reached"</span>
            </div>
            <div class="stat">
                <strong>{move || store.stats().get().co2}</strong>
                <span>"kg CO2 avoided"</span>
            </div>
        </section>
    }
}
