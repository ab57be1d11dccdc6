//! Creature Grid Component
//!
//! Fetches the full list once, filters it locally by name, and opens the
//! detail route when a card is activated.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::catalog::{filter_creatures, result_count, ListState, LIST_ERROR_MESSAGE};
use crate::components::{CreatureCard, LoadingIndicator, SearchBox, StatusMessage};
use crate::context::use_catalog;
use crate::routes;

#[component]
pub fn CreatureGrid() -> impl IntoView {
    let catalog = use_catalog();
    let theme = catalog.theme;
    let (list_state, set_list_state) = signal(ListState::Loading);
    let (search_term, set_search_term) = signal(String::new());

    // Load list on mount
    let source = catalog.source.clone();
    Effect::new(move |_| {
        let request = source.list_creatures();
        spawn_local(async move {
            let result = request.await;
            match &result {
                Ok(list) => log::debug!("[catalog] loaded {} creatures", list.len()),
                Err(e) => log::warn!("[catalog] list failed: {}", e),
            }
            // The grid may be gone by the time the request resolves
            let _ = set_list_state.try_set(ListState::from(result));
        });
    });

    // Pure derivation; typing never re-fetches
    let filtered = Memo::new(move |_| {
        let term = search_term.get();
        list_state.with(|state| filter_creatures(state.creatures(), &term))
    });
    let total = Memo::new(move |_| list_state.with(|state| state.creatures().len()));

    let navigate = use_navigate();
    let open = Callback::new(move |name: String| {
        let path = routes::detail_path(&name);
        log::debug!("[catalog] open {}", path);
        navigate(&path, Default::default());
    });

    view! {
        {move || match list_state.get() {
            ListState::Loading => view! { <LoadingIndicator /> }.into_any(),
            ListState::Failed(_) => view! { <StatusMessage text=LIST_ERROR_MESSAGE error=true /> }.into_any(),
            ListState::Loaded(_) => view! {
                <div class="catalog">
                    <SearchBox value=search_term set_value=set_search_term />
                    <p class="result-count" style="text-align: center; opacity: 0.7;">
                        {move || result_count(filtered.with(|list| list.len()), total.get())}
                    </p>
                    <Show
                        when=move || filtered.with(|list| !list.is_empty())
                        fallback=|| view! { <StatusMessage text="No Pokémon match your search" /> }
                    >
                        <div class="creature-grid" style=theme.grid_style()>
                            <For
                                each=move || filtered.get()
                                key=|creature| creature.id.clone()
                                children=move |creature| view! { <CreatureCard creature=creature on_open=open /> }
                            />
                        </div>
                    </Show>
                </div>
            }.into_any(),
        }}
    }
}
