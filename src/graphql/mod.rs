//! GraphQL Data Access
//!
//! The two read operations every view goes through, organized by concern.

mod client;
mod error;
mod queries;

use std::future::Future;
use std::pin::Pin;

use crate::models::{CreatureDetail, CreatureSummary};

pub use client::GraphqlClient;
pub use error::FetchError;
pub use queries::CreatureQuery;

/// Boxed future driven by `spawn_local`; not `Send` on wasm.
pub type LocalFuture<T> = Pin<Box<dyn Future<Output = T>>>;

/// Read-only catalog operations.
///
/// Implementations issue the network call when the method is invoked and
/// leave caching and retries to the transport.
pub trait CreatureSource {
    /// Whole list or an error; never a partial list.
    fn list_creatures(&self) -> LocalFuture<Result<Vec<CreatureSummary>, FetchError>>;

    /// `Ok(None)` when the server has no creature for the key.
    /// Callers must not invoke this with an empty query.
    fn get_creature(&self, query: CreatureQuery) -> LocalFuture<Result<Option<CreatureDetail>, FetchError>>;
}
