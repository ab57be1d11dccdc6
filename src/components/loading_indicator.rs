use leptos::prelude::*;

use crate::context::use_catalog;

/// Progress indicator shown while a query is outstanding
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let theme = use_catalog().theme;
    view! {
        <div class="loading" role="progressbar" aria-busy="true" style=theme.message_style(false)>
            "Loading..."
        </div>
    }
}

/// Centered one-line message; `error` switches to the error color
#[component]
pub fn StatusMessage(
    #[prop(into)] text: String,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let theme = use_catalog().theme;
    let class = if error { "status-message error" } else { "status-message" };
    view! {
        <p class=class style=theme.message_style(error)>{text}</p>
    }
}
