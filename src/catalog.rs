//! Catalog Utilities
//!
//! List state and search filtering for the grid.

use crate::graphql::FetchError;
use crate::models::CreatureSummary;

/// Message shown when the list query fails.
pub const LIST_ERROR_MESSAGE: &str = "Error loading Pokémon";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<CreatureSummary>),
}

impl From<Result<Vec<CreatureSummary>, FetchError>> for ListState {
    fn from(result: Result<Vec<CreatureSummary>, FetchError>) -> Self {
        match result {
            Ok(list) => ListState::Loaded(list),
            Err(err) => ListState::Failed(err.to_string()),
        }
    }
}

impl ListState {
    pub fn creatures(&self) -> &[CreatureSummary] {
        match self {
            ListState::Loaded(list) => list,
            _ => &[],
        }
    }
}

/// Case-insensitive substring match on name
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Keep matching creatures in their original order
pub fn filter_creatures(list: &[CreatureSummary], term: &str) -> Vec<CreatureSummary> {
    list.iter()
        .filter(|creature| name_matches(&creature.name, term))
        .cloned()
        .collect()
}

/// Keyboard equivalent of a click on a card
pub fn is_confirm_key(key: &str) -> bool {
    key == "Enter"
}

/// "3 of 151 Pokémon"
pub fn result_count(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{} Pokémon", total)
    } else {
        format!("{} of {} Pokémon", shown, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::summary;

    fn sample() -> Vec<CreatureSummary> {
        vec![
            summary("1", "Bulbasaur"),
            summary("25", "Pikachu"),
            summary("26", "Raichu"),
            summary("122", "Mr. Mime"),
            summary("172", "Pichu"),
        ]
    }

    fn names(list: &[CreatureSummary]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let list = sample();
        assert_eq!(filter_creatures(&list, ""), list);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let list = sample();
        assert_eq!(names(&filter_creatures(&list, "CHU")), vec!["Pikachu", "Raichu", "Pichu"]);
        assert_eq!(names(&filter_creatures(&list, "pi")), vec!["Pikachu", "Pichu"]);
        assert_eq!(names(&filter_creatures(&list, "mr. m")), vec!["Mr. Mime"]);
    }

    #[test]
    fn test_filter_matches_exact_subset() {
        let list = sample();
        for term in ["", "a", "U", "chu", "zzz", " ", "."] {
            let filtered = filter_creatures(&list, term);
            let expected: Vec<_> = list
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&term.to_lowercase()))
                .cloned()
                .collect();
            assert_eq!(filtered, expected, "term {:?}", term);
        }
    }

    #[test]
    fn test_no_match() {
        assert!(filter_creatures(&sample(), "missingno").is_empty());
    }

    #[test]
    fn test_list_state_from_result() {
        let loaded = ListState::from(Ok(sample()));
        assert_eq!(loaded.creatures().len(), 5);

        let failed = ListState::from(Err(FetchError::Transport("offline".into())));
        assert!(matches!(failed, ListState::Failed(_)));
        assert!(failed.creatures().is_empty());
        assert!(ListState::default().creatures().is_empty());
    }

    #[test]
    fn test_confirm_key() {
        assert!(is_confirm_key("Enter"));
        assert!(!is_confirm_key("Tab"));
        assert!(!is_confirm_key("a"));
    }

    #[test]
    fn test_result_count() {
        assert_eq!(result_count(151, 151), "151 Pokémon");
        assert_eq!(result_count(3, 151), "3 of 151 Pokémon");
    }
}
