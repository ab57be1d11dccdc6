//! Query Documents and Envelopes
//!
//! The two read operations, their variables, and the GraphQL response wrapper.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{FetchError, Result};
use crate::models::{CreatureDetail, CreatureSummary};

// ========================
// Documents
// ========================

pub const LIST_QUERY: &str = r#"
  query pokemons {
    pokemons {
      id
      number
      name
      image
      types
    }
  }
"#;

/// Same field set, for deployments that require a `first` argument.
pub const LIST_QUERY_LIMITED: &str = r#"
  query pokemons($first: Int!) {
    pokemons(first: $first) {
      id
      number
      name
      image
      types
    }
  }
"#;

pub const DETAIL_QUERY: &str = r#"
  query pokemon($id: String, $name: String) {
    pokemon(id: $id, name: $name) {
      id
      number
      name
      weight {
        minimum
        maximum
      }
      height {
        minimum
        maximum
      }
      classification
      types
      resistant
      weaknesses
      fleeRate
      maxCP
      maxHP
      image
    }
  }
"#;

// ========================
// Variables
// ========================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Lookup key for a single creature.
///
/// Blank strings count as absent. When both keys are present the name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CreatureQuery {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl CreatureQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self { id: None, name: Some(name.into()) }
    }

    #[cfg(test)]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), name: None }
    }

    /// From an optional route parameter.
    pub fn from_name(name: Option<String>) -> Self {
        Self { id: None, name }
    }

    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// True when the request must be skipped entirely.
    pub fn is_empty(&self) -> bool {
        Self::present(&self.name).is_none() && Self::present(&self.id).is_none()
    }

    pub fn variables(&self) -> DetailVariables {
        match Self::present(&self.name) {
            Some(name) => DetailVariables { id: None, name: Some(name.to_string()) },
            None => DetailVariables {
                id: Self::present(&self.id).map(str::to_string),
                name: None,
            },
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> String {
        let vars = self.variables();
        match (vars.name, vars.id) {
            (Some(name), _) => format!("name={}", name),
            (None, Some(id)) => format!("id={}", id),
            (None, None) => "<none>".to_string(),
        }
    }
}

// ========================
// Envelopes
// ========================

#[derive(Serialize)]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

impl<T> GraphqlResponse<T> {
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// Errors take precedence over any partial data.
    pub fn into_result(self) -> Result<Option<T>> {
        match self.errors {
            Some(errors) if !errors.is_empty() => {
                Err(FetchError::Server(errors.into_iter().map(|e| e.message).collect()))
            }
            _ => Ok(self.data),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListData {
    pub pokemons: Option<Vec<CreatureSummary>>,
}

#[derive(Debug, Deserialize)]
pub struct DetailData {
    pub pokemon: Option<CreatureDetail>,
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<GraphqlResponse<T>> {
    Ok(serde_json::from_str(body)?)
}

/// The list resolves whole or not at all.
pub fn list_from_response(response: GraphqlResponse<ListData>) -> Result<Vec<CreatureSummary>> {
    response
        .into_result()?
        .and_then(|data| data.pokemons)
        .ok_or_else(|| FetchError::Decode("response has no pokemons".to_string()))
}

/// `None` means the server could not resolve the key.
pub fn detail_from_response(response: GraphqlResponse<DetailData>) -> Result<Option<CreatureDetail>> {
    Ok(response.into_result()?.and_then(|data| data.pokemon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_skipped() {
        assert!(CreatureQuery::default().is_empty());
        assert!(CreatureQuery::from_name(None).is_empty());
        assert!(CreatureQuery::by_name("   ").is_empty());
        assert!(!CreatureQuery::by_id("UG9rZW1vbjowMjU=").is_empty());
    }

    #[test]
    fn test_name_takes_precedence_over_id() {
        let query = CreatureQuery {
            id: Some("UG9rZW1vbjowMDE=".into()),
            name: Some("Pikachu".into()),
        };
        let vars = serde_json::to_value(query.variables()).unwrap();
        assert_eq!(vars, serde_json::json!({ "name": "Pikachu" }));
        assert_eq!(query.label(), "name=Pikachu");
    }

    #[test]
    fn test_id_used_when_name_blank() {
        let query = CreatureQuery { id: Some("abc".into()), name: Some("".into()) };
        let vars = serde_json::to_value(query.variables()).unwrap();
        assert_eq!(vars, serde_json::json!({ "id": "abc" }));
    }

    #[test]
    fn test_list_variables_omit_absent_limit() {
        let vars = serde_json::to_value(ListVariables { first: None }).unwrap();
        assert_eq!(vars, serde_json::json!({}));
        let vars = serde_json::to_value(ListVariables { first: Some(151) }).unwrap();
        assert_eq!(vars, serde_json::json!({ "first": 151 }));
    }

    #[test]
    fn test_list_response() {
        let body = r#"{"data":{"pokemons":[
            {"id":"1","number":"001","name":"Bulbasaur","image":"b.png","types":["Grass","Poison"]},
            {"id":"4","number":"004","name":"Charmander","image":"c.png","types":["Fire"]}
        ]}}"#;
        let list = list_from_response(decode(body).unwrap()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Bulbasaur");
        assert_eq!(list[0].types, vec!["Grass", "Poison"]);
    }

    #[test]
    fn test_list_errors_discard_partial_data() {
        let body = r#"{
            "data":{"pokemons":[{"id":"1","number":"001","name":"Bulbasaur","image":"b.png","types":[]}]},
            "errors":[{"message":"resolver exploded"}]
        }"#;
        let err = list_from_response(decode(body).unwrap()).unwrap_err();
        assert_eq!(err, FetchError::Server(vec!["resolver exploded".into()]));
    }

    #[test]
    fn test_list_without_data_is_decode_error() {
        let err = list_from_response(decode(r#"{"data":null}"#).unwrap()).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_unknown_creature_is_empty_not_error() {
        let detail = detail_from_response(decode(r#"{"data":{"pokemon":null}}"#).unwrap()).unwrap();
        assert!(detail.is_none());
    }

    #[test]
    fn test_empty_errors_array_is_success() {
        let detail =
            detail_from_response(decode(r#"{"data":{"pokemon":null},"errors":[]}"#).unwrap()).unwrap();
        assert!(detail.is_none());
    }

    #[test]
    fn test_malformed_body() {
        let err = decode::<DetailData>("<html>502</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
