//! GraphQL Client
//!
//! `reqwest`-backed implementation of [`CreatureSource`].

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{FetchError, Result};
use super::queries::{
    self, CreatureQuery, DetailData, GraphqlRequest, GraphqlResponse, ListData, ListVariables,
    DETAIL_QUERY, LIST_QUERY, LIST_QUERY_LIMITED,
};
use super::{CreatureSource, LocalFuture};
use crate::models::{CreatureDetail, CreatureSummary};

/// POSTs query documents to a single endpoint.
#[derive(Clone)]
pub struct GraphqlClient {
    endpoint: String,
    list_limit: Option<u32>,
    http: Client,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>, list_limit: Option<u32>) -> Self {
        Self {
            endpoint: endpoint.into(),
            list_limit,
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn list_document(limit: Option<u32>) -> &'static str {
    if limit.is_some() {
        LIST_QUERY_LIMITED
    } else {
        LIST_QUERY
    }
}

async fn post<V, T>(http: Client, endpoint: String, query: &str, variables: V) -> Result<GraphqlResponse<T>>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let response = http
        .post(&endpoint)
        .json(&GraphqlRequest { query, variables })
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;
    interpret(status, &body)
}

/// Map status and body to a response.
///
/// GraphQL servers often answer errors with 4xx plus an `errors` body; that body
/// wins. Any other non-2xx reply is a status error, even when it parses as JSON.
fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<GraphqlResponse<T>> {
    let success = (200..300).contains(&status);
    match queries::decode::<T>(body) {
        Ok(parsed) if success || parsed.has_errors() => Ok(parsed),
        Ok(_) => Err(FetchError::Status(status)),
        Err(_) if !success => Err(FetchError::Status(status)),
        Err(err) => Err(err),
    }
}

impl CreatureSource for GraphqlClient {
    fn list_creatures(&self) -> LocalFuture<Result<Vec<CreatureSummary>>> {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        let document = list_document(self.list_limit);
        let variables = ListVariables { first: self.list_limit };
        Box::pin(async move {
            log::debug!("[graphql] pokemons -> {}", endpoint);
            let response = post::<_, ListData>(http, endpoint, document, variables).await?;
            queries::list_from_response(response)
        })
    }

    fn get_creature(&self, query: CreatureQuery) -> LocalFuture<Result<Option<CreatureDetail>>> {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            log::debug!("[graphql] pokemon({}) -> {}", query.label(), endpoint);
            let response = post::<_, DetailData>(http, endpoint, DETAIL_QUERY, query.variables()).await?;
            queries::detail_from_response(response)
        })
    }
}
