//! Pokédex App
//!
//! Composition root: builds the data source, provides context, and mounts the route table.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::{CreatureGrid, DetailRoute, StatusMessage};
use crate::config::{AppConfig, Presentation};
use crate::context::CatalogContext;
use crate::graphql::GraphqlClient;
use crate::theme::Theme;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = GraphqlClient::new(config.endpoint.clone(), config.list_limit());
    log::info!(
        "[app] endpoint={} presentation={:?} limit={:?}",
        client.endpoint(),
        config.presentation,
        config.list_limit()
    );

    let theme = Theme::default();
    let presentation = config.presentation;
    provide_context(CatalogContext::new(Arc::new(client), &config, theme));

    view! {
        <Router>
            <main class="app" style=theme.page_style()>
                <h1 style="text-align: center; margin: 0; padding-top: 24px;">"Pokédex"</h1>
                <CatalogRoutes presentation=presentation />
            </main>
        </Router>
    }
}

/// Route table for the configured presentation
#[component]
fn CatalogRoutes(presentation: Presentation) -> impl IntoView {
    match presentation {
        // `/pokemon/:name` opens a modal over the grid; close returns to `/`
        Presentation::Dialog => view! {
            <Routes fallback=|| view! { <StatusMessage text="Not found." /> }>
                <ParentRoute path=path!("") view=CatalogPage>
                    <Route path=path!("") view=|| () />
                    <Route path=path!("pokemon/:name") view=DetailRoute />
                </ParentRoute>
            </Routes>
        }.into_any(),
        // `/pokemon/:name` is a sub-page above the grid; close returns to `/pokemon`.
        // One parent for every list path so the grid survives open and close.
        Presentation::Page => view! {
            <Routes fallback=|| view! { <StatusMessage text="Not found." /> }>
                <ParentRoute path=path!("") view=CatalogPage>
                    <Route path=path!("") view=|| () />
                    <Route path=path!("pokemon") view=|| () />
                    <Route path=path!("pokemon/:name") view=DetailRoute />
                </ParentRoute>
            </Routes>
        }.into_any(),
    }
}

/// Detail outlet plus the grid
#[component]
fn CatalogPage() -> impl IntoView {
    view! {
        <Outlet />
        <CreatureGrid />
    }
}
