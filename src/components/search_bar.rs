//! Search Bar Component
//!
//! Free-text query, category and location inputs, and the nearby toggle.
//! Text inputs are staged locally and only applied when the search runs;
//! the nearby toggle applies immediately.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::CATEGORIES;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (q, set_q) = signal(String::new());
    let (location, set_location) = signal(String::new());

    let run_search = move || ctx.apply_search(q.get(), location.get());

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search items..."
                prop:value=move || q.get()
                on:input=move |ev| set_q.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run_search();
                    }
                }
            />

            <select on:change=move |ev| ctx.stage_category(event_target_value(&ev))>
                <option value="">"All categories"</option>
                {CATEGORIES.iter().map(|category| {
                    view! { <option value=*category>{*category}</option> }
                }).collect_view()}
            </select>

            <input
                type="text"
                placeholder="Pincode / area"
                prop:value=move || location.get()
                on:input=move |ev| set_location.set(event_target_value(&ev))
            />

            <label class="nearby-toggle">
                <input
                    type="checkbox"
                    on:change=move |ev| ctx.set_only_nearby(event_target_checked(&ev))
                />
                "Nearby only"
            </label>

            <button class="btn" on:click=move |_| run_search()>"Search"</button>
        </div>
    }
}
