// src/shared/patch.rs
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear the value (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Applies the patch to an optional field. `Null` clears it.
    pub fn apply_to_option(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }

    /// Applies the patch to a required field. `Null` cannot clear a
    /// required field and is treated like `Unset`.
    pub fn apply_to(self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v;
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Unset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        link: PatchField<String>,
    }

    #[test]
    fn omitted_field_is_unset() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.link.is_unset());
    }

    #[test]
    fn explicit_null_is_null() {
        let probe: Probe = serde_json::from_str(r#"{"link": null}"#).unwrap();
        assert!(probe.link.is_null());
    }

    #[test]
    fn value_is_value() {
        let probe: Probe = serde_json::from_str(r#"{"link": "https://x.dev"}"#).unwrap();
        assert_eq!(probe.link.as_value().map(String::as_str), Some("https://x.dev"));
    }

    #[test]
    fn apply_to_option_clears_on_null() {
        let mut target = Some("old".to_string());
        PatchField::<String>::Null.apply_to_option(&mut target);
        assert_eq!(target, None);

        let mut target = Some("old".to_string());
        PatchField::<String>::Unset.apply_to_option(&mut target);
        assert_eq!(target.as_deref(), Some("old"));
    }

    #[test]
    fn apply_to_required_ignores_null() {
        let mut target = "kept".to_string();
        PatchField::<String>::Null.apply_to(&mut target);
        assert_eq!(target, "kept");

        PatchField::Value("new".to_string()).apply_to(&mut target);
        assert_eq!(target, "new");
    }
}
