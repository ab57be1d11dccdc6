//! Runtime Configuration
//!
//! Read once at startup from `window.__POKEDEX_CONFIG__`, falling back to defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__POKEDEX_CONFIG__";

const FALLBACK_ENDPOINT: &str = "https://graphql-pokemon2.vercel.app/";

/// The fallback deployment rejects `pokemons` without `first`.
const FALLBACK_LIST_LIMIT: u32 = 151;

/// How the detail view is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Modal over the grid, closes back to `/`.
    #[default]
    Dialog,
    /// Routed sub-page under `/pokemon`, closes back to `/pokemon`.
    Page,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub endpoint: String,
    pub presentation: Presentation,
    /// Sent as `first` on the list query; see [`AppConfig::list_limit`].
    pub list_limit: Option<u32>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: option_env!("POKEDEX_GRAPHQL_ENDPOINT")
                .unwrap_or(FALLBACK_ENDPOINT)
                .to_string(),
            presentation: Presentation::default(),
            list_limit: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults when the global is missing or malformed.
    pub fn load() -> Self {
        match Self::from_window() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                web_sys::console::warn_1(&format!("[config] ignoring {}: {}", CONFIG_GLOBAL, err).into());
                Self::default()
            }
        }
    }

    fn from_window() -> Result<Option<Self>, String> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| format!("{:?}", e))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| e.to_string())
    }

    /// Configured limit, or the fallback deployment's required one.
    pub fn list_limit(&self) -> Option<u32> {
        self.list_limit
            .or_else(|| (self.endpoint == FALLBACK_ENDPOINT).then_some(FALLBACK_LIST_LIMIT))
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
