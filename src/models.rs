//! Frontend Models
//!
//! Data structures matching the GraphQL schema.

use serde::{Deserialize, Deserializer, Serialize};

/// List card data (matches `pokemons` query)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Min/max pair used for weight and height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub minimum: String,
    pub maximum: String,
}

impl Range {
    pub fn display(&self) -> String {
        format!("{} - {}", self.minimum, self.maximum)
    }
}

/// Full record (matches `pokemon` query)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureDetail {
    pub id: String,
    pub number: String,
    pub name: String,
    pub weight: Range,
    pub height: Range,
    pub classification: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub resistant: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub flee_rate: String,
    #[serde(rename = "maxCP")]
    pub max_cp: i64,
    #[serde(rename = "maxHP")]
    pub max_hp: i64,
    pub image: String,
}

/// Some deployments send `fleeRate` as a float, others as a string.
fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected number or string, got {}",
            other
        ))),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn summary(id: &str, name: &str) -> CreatureSummary {
        CreatureSummary {
            id: id.to_string(),
            number: "000".to_string(),
            name: name.to_string(),
            image: format!("https://img.example/{}.png", name.to_lowercase()),
            types: vec!["Normal".to_string()],
        }
    }

    pub fn pikachu() -> CreatureDetail {
        CreatureDetail {
            id: "UG9rZW1vbjowMjU=".to_string(),
            number: "025".to_string(),
            name: "Pikachu".to_string(),
            weight: Range { minimum: "5.25kg".to_string(), maximum: "6.75kg".to_string() },
            height: Range { minimum: "0.35m".to_string(), maximum: "0.45m".to_string() },
            classification: "Mouse Pokémon".to_string(),
            types: vec!["Electric".to_string()],
            resistant: vec!["Electric".to_string(), "Flying".to_string(), "Steel".to_string()],
            weaknesses: vec!["Ground".to_string()],
            flee_rate: "0.1".to_string(),
            max_cp: 777,
            max_hp: 70,
            image: "https://img.pokemondb.net/artwork/pikachu.jpg".to_string(),
        }
    }

    pub fn raichu() -> CreatureDetail {
        CreatureDetail {
            id: "UG9rZW1vbjowMjY=".to_string(),
            number: "026".to_string(),
            name: "Raichu".to_string(),
            max_cp: 2028,
            max_hp: 101,
            ..pikachu()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_decodes_wire_names() {
        let json = r#"{
            "id": "UG9rZW1vbjowMjU=",
            "number": "025",
            "name": "Pikachu",
            "weight": { "minimum": "5.25kg", "maximum": "6.75kg" },
            "height": { "minimum": "0.35m", "maximum": "0.45m" },
            "classification": "Mouse Pokémon",
            "types": ["Electric"],
            "resistant": ["Electric", "Flying", "Steel"],
            "weaknesses": ["Ground"],
            "fleeRate": 0.1,
            "maxCP": 777,
            "maxHP": 70,
            "image": "https://img.pokemondb.net/artwork/pikachu.jpg"
        }"#;

        let detail: CreatureDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.flee_rate, "0.1");
        assert_eq!(detail.max_cp, 777);
        assert_eq!(detail.max_hp, 70);
        assert_eq!(detail.weaknesses, vec!["Ground"]);
        assert_eq!(detail.height.display(), "0.35m - 0.45m");
    }

    #[test]
    fn test_flee_rate_accepts_string() {
        let mut value = serde_json::to_value(fixtures::pikachu()).unwrap();
        value["fleeRate"] = serde_json::json!("0.25");
        let detail: CreatureDetail = serde_json::from_value(value).unwrap();
        assert_eq!(detail.flee_rate, "0.25");
    }

    #[test]
    fn test_flee_rate_rejects_other_shapes() {
        let mut value = serde_json::to_value(fixtures::pikachu()).unwrap();
        value["fleeRate"] = serde_json::json!([1]);
        assert!(serde_json::from_value::<CreatureDetail>(value).is_err());
    }
}
