//! Post Form Component
//!
//! Modal form for posting a new listing, with an optional photo. Validation
//! failures and photo-read failures abort the submission with nothing
//! mutated; a successful post appends the listing, bumps the counters,
//! persists both and closes the dialog.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ids;
use crate::models::{ListingDraft, ListingKind, CATEGORIES, PLACEHOLDER_IMG};
use crate::photo;
use crate::store::{
    store_add_listing, store_record_post, use_app_store, AppStateStoreFields,
};
use crate::timefmt::now_ms;

/// Tell the user why the submission was aborted, keeping the form contents
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn PostForm(dialog_ref: NodeRef<html::Dialog>) -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (kind, set_kind) = signal(String::from("free"));
    let (location, set_location) = signal(String::new());
    let (desc, set_desc) = signal(String::new());
    let photo_input = NodeRef::<html::Input>::new();

    let reset_form = move || {
        set_title.set(String::new());
        set_category.set(String::new());
        set_kind.set(String::from("free"));
        set_location.set(String::new());
        set_desc.set(String::new());
        if let Some(input) = photo_input.get() {
            input.set_value("");
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ListingDraft {
            title: title.get(),
            category: category.get(),
            kind: kind.get(),
            location: location.get(),
            desc: desc.get(),
        };
        if let Err(err) = draft.validate() {
            notify(&err.to_string());
            return;
        }

        // An empty file selection posts with the placeholder image
        let file = photo_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .filter(|file| file.size() > 0.0);

        spawn_local(async move {
            let img = match file {
                Some(file) => match photo::read_as_data_url(&file).await {
                    Ok(data_url) => data_url,
                    Err(err) => {
                        notify(&err.to_string());
                        return;
                    }
                },
                None => PLACEHOLDER_IMG.to_string(),
            };

            let id = store.listings().with_untracked(|listings| ids::unused_id(listings));
            let listing = match draft.into_listing(id, img, now_ms()) {
                Ok(listing) => listing,
                Err(err) => {
                    notify(&err.to_string());
                    return;
                }
            };

            store_add_listing(&store, listing);
            store_record_post(&store);

            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
            reset_form();
        });
    };

    let close = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref>
            <header class="modal__head">
                <h3>"Post an item"</h3>
                <button class="icon-btn" on:click=close>"✕"</button>
            </header>

            <form class="post-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Title *"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <div class="post-form__row">
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="">"Category *"</option>
                        {CATEGORIES.iter().map(|category| {
                            view! { <option value=*category>{*category}</option> }
                        }).collect_view()}
                    </select>

                    <select
                        prop:value=move || kind.get()
                        on:change=move |ev| set_kind.set(event_target_value(&ev))
                    >
                        {ListingKind::ALL.iter().map(|k| {
                            view! { <option value=k.as_str()>{k.label()}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <input
                    type="text"
                    placeholder="Pincode / area *"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                />

                <textarea
                    placeholder="Description (pickup details, condition...)"
                    prop:value=move || desc.get()
                    on:input=move |ev| set_desc.set(event_target_value(&ev))
                ></textarea>

                <label class="post-form__photo">
                    "Photo (optional)"
                    <input type="file" accept="image/*" node_ref=photo_input/>
                </label>

                <button type="submit" class="btn">"Post"</button>
            </form>
        </dialog>
    }
}
