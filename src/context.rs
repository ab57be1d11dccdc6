//! Application Context
//!
//! Shared collaborators provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::{AppConfig, Presentation};
use crate::graphql::CreatureSource;
use crate::theme::Theme;

/// Data source, theme and presentation, injected once at the root
#[derive(Clone)]
pub struct CatalogContext {
    pub source: Arc<dyn CreatureSource + Send + Sync>,
    pub theme: Theme,
    pub presentation: Presentation,
}

impl CatalogContext {
    pub fn new(source: Arc<dyn CreatureSource + Send + Sync>, config: &AppConfig, theme: Theme) -> Self {
        Self {
            source,
            theme,
            presentation: config.presentation,
        }
    }
}

/// Get the catalog context
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}
