use leptos::prelude::*;

use crate::context::use_catalog;

/// Labeled chip for a type or weakness tag
#[component]
pub fn TagChip(
    #[prop(into)] label: String,
    /// Weakness chips use the warning color
    #[prop(optional)] weakness: bool,
) -> impl IntoView {
    let theme = use_catalog().theme;
    let class = if weakness { "chip chip-weakness" } else { "chip" };
    let aria = label.clone();
    view! {
        <span class=class style=theme.chip_style(weakness) aria-label=aria>
            {label}
        </span>
    }
}
