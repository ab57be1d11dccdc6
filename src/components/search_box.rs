//! Search Box Component
//!
//! Text input bound to the catalog search term. Updates on every keystroke.

use leptos::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn SearchBox(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let theme = use_catalog().theme;
    view! {
        <input
            class="search-box"
            type="text"
            placeholder="Search Pokémon..."
            aria-label="Search Pokémon"
            autocomplete="off"
            style=theme.search_style()
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
        />
    }
}
