// src/shared/persistence/seed.rs
use serde::Serialize;
use tracing::info;

use super::persisted_store::encode_envelope;
use super::storage::{KeyValueStorage, StorageError};

/// Default envelope for one storage key.
#[derive(Debug, Clone)]
pub struct Seed {
    pub key: &'static str,
    pub envelope: String,
}

impl Seed {
    pub fn new<S: Serialize>(key: &'static str, version: u32, state: &S) -> Result<Self, StorageError> {
        Ok(Self {
            key,
            envelope: encode_envelope(state, version)?,
        })
    }
}

/// First-run initialization: writes each seed whose key is absent and leaves
/// existing keys untouched. Returns the keys that were written.
pub fn seed_defaults(
    storage: &dyn KeyValueStorage,
    seeds: &[Seed],
) -> Result<Vec<&'static str>, StorageError> {
    let mut seeded = Vec::new();

    for seed in seeds {
        if storage.contains(seed.key)? {
            continue;
        }
        storage.set(seed.key, &seed.envelope)?;
        seeded.push(seed.key);
    }

    if !seeded.is_empty() {
        info!("Seeded default data for: {}", seeded.join(", "));
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::persistence::storage::InMemoryStorage;

    #[test]
    fn seeds_only_absent_keys() {
        let storage = InMemoryStorage::new();
        storage.set("existing", "keep-me").unwrap();

        let seeds = vec![
            Seed::new("existing", 1, &vec![1]).unwrap(),
            Seed::new("fresh", 1, &vec![2]).unwrap(),
        ];

        let seeded = seed_defaults(&storage, &seeds).unwrap();

        assert_eq!(seeded, vec!["fresh"]);
        assert_eq!(storage.get("existing").unwrap().as_deref(), Some("keep-me"));
        assert_eq!(
            storage.get("fresh").unwrap().as_deref(),
            Some(r#"{"state":[2],"version":1}"#)
        );
    }

    #[test]
    fn second_run_seeds_nothing() {
        let storage = InMemoryStorage::new();
        let seeds = vec![Seed::new("k", 1, &"v").unwrap()];

        seed_defaults(&storage, &seeds).unwrap();
        let again = seed_defaults(&storage, &seeds).unwrap();

        assert!(again.is_empty());
    }
}
