//! Detail View Component
//!
//! One component for both presentations. Owns its fetch state; unmounting
//! it discards any request still in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadingIndicator, StatusMessage, TagChip};
use crate::config::Presentation;
use crate::context::use_catalog;
use crate::detail::{
    detail_fields, is_dismiss_key, joined, CloseGuard, DetailFetch, DetailState, ERROR_MESSAGE, IDLE_MESSAGE,
};
use crate::graphql::CreatureQuery;
use crate::models::CreatureDetail;

#[component]
pub fn DetailView(
    /// Creature name; `None` renders the idle placeholder
    #[prop(into)] name: Signal<Option<String>>,
    presentation: Presentation,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let catalog = use_catalog();
    let theme = catalog.theme;
    let fetch = RwSignal::new(DetailFetch::default());
    let close_guard = StoredValue::new(CloseGuard::default());

    let source = catalog.source.clone();
    let start = move |name: Option<String>| {
        let query = CreatureQuery::from_name(name);
        let Some((ticket, request)) = fetch.try_update(|f| f.load(source.as_ref(), query)).flatten() else {
            return;
        };
        log::debug!("[detail] fetching {}", ticket.query().label());
        spawn_local(async move {
            let result = request.await;
            // Disposed after close: nothing to update
            if fetch.try_update(|f| f.resolve(&ticket, result)).is_none() {
                log::debug!("[detail] view closed before {} resolved", ticket.query().label());
            }
        });
    };

    // First request happens before the first render so a named view never shows Idle
    start(name.get_untracked());

    let restart = start.clone();
    Effect::new(move |previous: Option<Option<String>>| {
        let current = name.get();
        if matches!(&previous, Some(prev) if *prev != current) {
            restart(current.clone());
        }
        current
    });

    let close = move || {
        if close_guard.try_update_value(|guard| guard.fire()).unwrap_or(false) {
            on_close.run(());
        }
    };

    let title = move || {
        fetch.with(|f| match f.state() {
            DetailState::Loaded(detail) => detail.name.clone(),
            state if state.is_loading() => "Loading Pokémon...".to_string(),
            _ => "Pokémon".to_string(),
        })
    };
    let busy = move || fetch.with(|f| f.state().is_loading()).to_string();

    let body = move || match fetch.with(|f| f.state().clone()) {
        DetailState::Idle => view! { <StatusMessage text=IDLE_MESSAGE /> }.into_any(),
        DetailState::Loading => view! { <LoadingIndicator /> }.into_any(),
        DetailState::Failed(_) => view! { <StatusMessage text=ERROR_MESSAGE error=true /> }.into_any(),
        DetailState::Loaded(detail) => view! { <DetailBody detail=detail presentation=presentation /> }.into_any(),
        DetailState::Empty => view! { <span></span> }.into_any(),
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            close();
        }
    };

    // Focus starts inside the view so Escape works without a click first
    let backdrop_ref = NodeRef::<leptos::html::Div>::new();
    let page_ref = NodeRef::<leptos::html::Section>::new();
    Effect::new(move |_| {
        if let Some(el) = backdrop_ref.get() {
            let _ = el.focus();
        } else if let Some(el) = page_ref.get() {
            let _ = el.focus();
        }
    });

    match presentation {
        Presentation::Dialog => view! {
            <div
                node_ref=backdrop_ref
                class="dialog-backdrop"
                tabindex="-1"
                style=theme.backdrop_style()
                on:click=move |_| close()
                on:keydown=on_keydown
            >
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    aria-busy=busy
                    style=theme.dialog_style()
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="dialog-title" style="font-weight: bold;">{title}</h2>
                    <div class="dialog-content">{body}</div>
                    <div class="dialog-actions" style="text-align: right;">
                        <button class="close-btn" on:click=move |_| close()>"Close"</button>
                    </div>
                </div>
            </div>
        }.into_any(),
        Presentation::Page => view! {
            <section
                node_ref=page_ref
                class="detail-page"
                tabindex="-1"
                aria-busy=busy
                style=theme.page_panel_style()
                on:keydown=on_keydown
            >
                <header style="display: flex; justify-content: space-between; align-items: center;">
                    <h2 class="detail-title">{title}</h2>
                    <button class="close-btn" on:click=move |_| close()>"Close"</button>
                </header>
                {body}
            </section>
        }.into_any(),
    }
}

/// Every attribute once, in display order
#[component]
fn DetailBody(detail: CreatureDetail, presentation: Presentation) -> impl IntoView {
    let fields = detail_fields(&detail);
    let resistant = (presentation == Presentation::Page).then(|| {
        view! {
            <p class="detail-resistant"><b>"Resistant to: "</b>{joined(&detail.resistant)}</p>
        }
    });

    view! {
        <div class="detail-body">
            <img
                class="detail-image"
                src=detail.image.clone()
                alt=detail.name.clone()
                style="display: block; width: 120px; height: 120px; object-fit: contain; margin: 0 auto 1rem;"
            />
            <dl class="detail-fields">
                {fields.into_iter().map(|field| view! {
                    <div class="detail-field" style="display: flex; gap: 8px;">
                        <dt style="font-weight: bold;">{format!("{}:", field.label)}</dt>
                        <dd style="margin: 0;">{field.value}</dd>
                    </div>
                }).collect_view()}
            </dl>

            <h4 style="margin-bottom: 4px;">"Types:"</h4>
            <div class="detail-types">
                {detail.types.iter().map(|t| view! { <TagChip label=t.clone() /> }).collect_view()}
            </div>

            <h4 style="margin-bottom: 4px;">"Weaknesses:"</h4>
            <div class="detail-weaknesses">
                {detail.weaknesses.iter().map(|w| view! { <TagChip label=w.clone() weakness=true /> }).collect_view()}
            </div>

            {resistant}
        </div>
    }
}
