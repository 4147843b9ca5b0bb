// src/shared/view/selection.rs
use serde::{Deserialize, Deserializer};

/// Sentinel accepted from clients to mean "no filtering".
pub const ALL: &str = "all";

/// A single-value filter (category, technology, tag).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Selection::All,
            Some(value) if value.eq_ignore_ascii_case(ALL) => Selection::All,
            Some(value) => Selection::Only(value.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn matches_any<'a>(&self, mut values: impl Iterator<Item = &'a str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => values.any(|v| v == selected),
        }
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Selection::parse(raw.as_deref()))
    }
}

/// Keeps the items whose key equals the selected value. `All` keeps everything.
pub fn filter_selected<'a, T, F>(items: Vec<&'a T>, selection: &Selection, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    match selection {
        Selection::All => items,
        Selection::Only(_) => items
            .into_iter()
            .filter(|item| selection.matches(key(*item)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_treats_blank_and_sentinel_as_all() {
        assert_eq!(Selection::parse(None), Selection::All);
        assert_eq!(Selection::parse(Some("")), Selection::All);
        assert_eq!(Selection::parse(Some("All")), Selection::All);
        assert_eq!(
            Selection::parse(Some("web")),
            Selection::Only("web".to_string())
        );
    }

    #[test]
    fn exact_match_only() {
        let selection = Selection::Only("Rust".to_string());
        assert!(selection.matches("Rust"));
        assert!(!selection.matches("rust"));
        assert!(selection.matches_any(["Go", "Rust"].into_iter()));
        assert!(!selection.matches_any(["Go"].into_iter()));
    }

    #[test]
    fn filter_selected_keeps_order() {
        let items = vec![("1", "web"), ("2", "core"), ("3", "web")];
        let refs: Vec<_> = items.iter().collect();

        let web = filter_selected(refs.clone(), &Selection::Only("web".to_string()), |i| i.1);
        assert_eq!(web.iter().map(|i| i.0).collect::<Vec<_>>(), vec!["1", "3"]);

        let all = filter_selected(refs, &Selection::All, |i| i.1);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn deserializes_from_query_value() {
        #[derive(Deserialize)]
        struct Q {
            #[serde(default)]
            category: Selection,
        }

        let q: Q = serde_json::from_str(r#"{"category":"all"}"#).unwrap();
        assert_eq!(q.category, Selection::All);

        let q: Q = serde_json::from_str(r#"{"category":"core"}"#).unwrap();
        assert_eq!(q.category, Selection::Only("core".to_string()));

        let q: Q = serde_json::from_str("{}").unwrap();
        assert_eq!(q.category, Selection::All);
    }
}
