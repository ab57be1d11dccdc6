//! Detail View State
//!
//! Fetch lifecycle for a single detail view instance, plus the field layout
//! every presentation renders from.

use crate::graphql::{CreatureQuery, CreatureSource, FetchError, LocalFuture};
use crate::models::CreatureDetail;

/// Fixed body text for a failed fetch.
pub const ERROR_MESSAGE: &str = "Error loading details";

/// Placeholder when no creature is selected.
pub const IDLE_MESSAGE: &str = "No Pokémon selected";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    /// No identifier; nothing requested.
    #[default]
    Idle,
    Loading,
    /// Raw message kept for diagnostics only.
    Failed(String),
    Loaded(CreatureDetail),
    /// The server resolved nothing for the identifier.
    Empty,
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn detail(&self) -> Option<&CreatureDetail> {
        match self {
            DetailState::Loaded(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Tag carried by an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: CreatureQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &CreatureQuery {
        &self.query
    }
}

/// Stale-response guard.
///
/// Each request bumps the generation; only the newest ticket may write state.
#[derive(Debug, Clone, Default)]
pub struct DetailFetch {
    generation: u64,
    state: DetailState,
}

impl DetailFetch {
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Start tracking `query`. Returns `None` (and goes Idle) for an empty query.
    pub fn request(&mut self, query: CreatureQuery) -> Option<FetchTicket> {
        self.generation += 1;
        if query.is_empty() {
            self.state = DetailState::Idle;
            return None;
        }
        self.state = DetailState::Loading;
        Some(FetchTicket { generation: self.generation, query })
    }

    /// Issue the request through `source`. The source is only called for
    /// non-empty queries.
    pub fn load(
        &mut self,
        source: &dyn CreatureSource,
        query: CreatureQuery,
    ) -> Option<(FetchTicket, LocalFuture<Result<Option<CreatureDetail>, FetchError>>)> {
        let ticket = self.request(query)?;
        let future = source.get_creature(ticket.query.clone());
        Some((ticket, future))
    }

    /// Apply a result. Returns `false` when the ticket is stale and was ignored.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Option<CreatureDetail>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::warn!("[detail] dropping stale response for {}", ticket.query.label());
            return false;
        }
        self.state = match result {
            Ok(Some(detail)) => DetailState::Loaded(detail),
            Ok(None) => DetailState::Empty,
            Err(err) => {
                let kind = if err.is_transport() { "transport" } else { "response" };
                log::warn!("[detail] {} failed ({}): {}", ticket.query.label(), kind, err);
                DetailState::Failed(err.to_string())
            }
        };
        true
    }
}

/// Key that dismisses the view from anywhere inside it.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Lets a close callback fire once per view instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloseGuard {
    closed: bool,
}

impl CloseGuard {
    /// True the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }
}

// ========================
// Layout
// ========================

/// Labeled scalar row.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Scalar rows in display order, between the image and the chips.
pub fn detail_fields(detail: &CreatureDetail) -> Vec<DetailField> {
    let field = |label, value: String| DetailField { label, value };
    vec![
        field("Number", detail.number.clone()),
        field("Max HP", detail.max_hp.to_string()),
        field("Max CP", detail.max_cp.to_string()),
        field("Height", detail.height.display()),
        field("Weight", detail.weight.display()),
        field("Classification", detail.classification.clone()),
        field("Flee Rate", detail.flee_rate.clone()),
    ]
}

/// Plain list form used by the routed page.
pub fn joined(tags: &[String]) -> String {
    tags.join(", ")
}
