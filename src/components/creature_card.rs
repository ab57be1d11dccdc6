//! Creature Card Component
//!
//! One grid cell. Click and Enter both open the detail route.

use leptos::prelude::*;

use crate::catalog::is_confirm_key;
use crate::components::TagChip;
use crate::context::use_catalog;
use crate::models::CreatureSummary;

#[component]
pub fn CreatureCard(
    creature: CreatureSummary,
    /// Called with the creature name
    #[prop(into)] on_open: Callback<String>,
) -> impl IntoView {
    let theme = use_catalog().theme;
    let name_for_click = creature.name.clone();
    let name_for_key = creature.name.clone();

    view! {
        <div
            class="creature-card"
            role="button"
            tabindex="0"
            style=theme.card_style()
            on:click=move |_| on_open.run(name_for_click.clone())
            on:keydown=move |ev| {
                if is_confirm_key(&ev.key()) {
                    ev.prevent_default();
                    on_open.run(name_for_key.clone());
                }
            }
        >
            <img
                class="creature-image"
                src=creature.image.clone()
                alt=creature.name.clone()
                style="width: 120px; height: 120px; object-fit: contain; margin-bottom: 12px;"
            />
            <h3>{creature.name.clone()}</h3>
            <p class="creature-number">{format!("#{}", creature.number)}</p>
            <div class="creature-types" style="display: flex; justify-content: center; flex-wrap: wrap; margin-top: 8px;">
                {creature.types.iter().map(|t| view! { <TagChip label=t.clone() /> }).collect_view()}
            </div>
        </div>
    }
}
