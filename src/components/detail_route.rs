//! Detail Route
//!
//! Binds the `:name` segment to a [`DetailView`] and navigates away on close.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::DetailView;
use crate::context::use_catalog;
use crate::routes::{close_target, decode_segment};

#[component]
pub fn DetailRoute() -> impl IntoView {
    let presentation = use_catalog().presentation;
    let params = use_params_map();
    let name = Signal::derive(move || {
        params.with(|p| p.get("name")).map(|raw| decode_segment(&raw))
    });

    let navigate = use_navigate();
    let on_close = Callback::new(move |_: ()| {
        let target = close_target(presentation);
        log::debug!("[detail] close -> {}", target);
        navigate(target, Default::default());
    });

    view! { <DetailView name=name presentation=presentation on_close=on_close /> }
}
