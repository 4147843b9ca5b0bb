use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use crate::modules::preferences::domain::entities::{Theme, UiPreferences, UiPreferencesPatch};
use crate::shared::persistence::{KeyValueStorage, PersistedStore, Seed, StorageError};

pub const STORAGE_KEY: &str = "portfolio-ui";
pub const STORAGE_VERSION: u32 = 1;

/// Persisted UI preferences (theme, language, layout toggles).
pub struct PreferencesStore {
    inner: PersistedStore<UiPreferences>,
}

impl PreferencesStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: PersistedStore::load(
                storage,
                STORAGE_KEY,
                STORAGE_VERSION,
                UiPreferences::default(),
            ),
        }
    }

    pub fn seed() -> Result<Seed, StorageError> {
        Seed::new(STORAGE_KEY, STORAGE_VERSION, &UiPreferences::default())
    }

    pub fn current(&self) -> UiPreferences {
        self.inner.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiPreferences> {
        self.inner.subscribe()
    }

    /// An empty patch changes nothing and is not written.
    pub fn update(&self, patch: UiPreferencesPatch) -> UiPreferences {
        if !patch.is_empty() {
            self.inner.mutate(|prefs| {
                patch.apply(prefs);
                Some(())
            });
        }
        self.current()
    }

    pub fn set_theme(&self, theme: Theme) -> UiPreferences {
        self.update(UiPreferencesPatch {
            theme: Some(theme),
            ..Default::default()
        })
    }

    pub fn toggle_theme(&self) -> UiPreferences {
        self.inner.mutate(|prefs| {
            prefs.theme = prefs.theme.toggled();
            debug!("Theme toggled to {:?}", prefs.theme);
            Some(())
        });
        self.current()
    }

    pub fn set_language(&self, language: &str) -> UiPreferences {
        self.update(UiPreferencesPatch {
            language: Some(language.to_string()),
            ..Default::default()
        })
    }

    pub fn toggle_sidebar(&self) -> UiPreferences {
        self.inner.mutate(|prefs| {
            prefs.sidebar_collapsed = !prefs.sidebar_collapsed;
            Some(())
        });
        self.current()
    }

    pub fn reset(&self) -> UiPreferences {
        self.inner.reset();
        self.current()
    }
}
