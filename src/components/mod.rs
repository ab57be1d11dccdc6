//! UI Components
//!
//! Reusable Leptos components.

mod creature_card;
mod creature_grid;
mod detail_route;
mod detail_view;
mod loading_indicator;
mod search_box;
mod tag_chip;

pub use creature_card::CreatureCard;
pub use creature_grid::CreatureGrid;
pub use detail_route::DetailRoute;
pub use detail_view::DetailView;
pub use loading_indicator::{LoadingIndicator, StatusMessage};
pub use search_box::SearchBox;
pub use tag_chip::TagChip;
