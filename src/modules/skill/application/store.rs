use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use crate::modules::skill::domain::defaults::{default_categories, default_skills};
use crate::modules::skill::domain::entities::{
    CategoryPatch, NewCategory, NewSkill, Skill, SkillCategory, SkillPatch,
};
use crate::shared::id::unique_id;
use crate::shared::persistence::{KeyValueStorage, PersistedStore, Seed, StorageError};

pub const STORAGE_KEY: &str = "portfolio-skills";
pub const STORAGE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillsState {
    pub skills: Vec<Skill>,
    pub categories: Vec<SkillCategory>,
}

impl Default for SkillsState {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            categories: default_categories(),
        }
    }
}

/// Persisted skills plus the categories they are grouped under.
pub struct SkillStore {
    inner: PersistedStore<SkillsState>,
}

impl SkillStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: PersistedStore::load(
                storage,
                STORAGE_KEY,
                STORAGE_VERSION,
                SkillsState::default(),
            ),
        }
    }

    pub fn seed() -> Result<Seed, StorageError> {
        Seed::new(STORAGE_KEY, STORAGE_VERSION, &SkillsState::default())
    }

    pub fn snapshot(&self) -> SkillsState {
        self.inner.snapshot()
    }

    pub fn read<R>(&self, f: impl FnOnce(&SkillsState) -> R) -> R {
        self.inner.read(f)
    }

    pub fn subscribe(&self) -> watch::Receiver<SkillsState> {
        self.inner.subscribe()
    }

    // ── skills ──────────────────────────────────────────────

    pub fn skills(&self) -> Vec<Skill> {
        self.inner.read(|s| s.skills.clone())
    }

    pub fn get_skill(&self, id: &str) -> Option<Skill> {
        self.inner
            .read(|s| s.skills.iter().find(|skill| skill.id == id).cloned())
    }

    pub fn add_skill(&self, new_skill: NewSkill) -> Skill {
        let id = self
            .inner
            .read(|s| unique_id(|candidate| s.skills.iter().any(|k| k.id == candidate)));
        let skill = new_skill.into_skill(id);

        self.inner.mutate(|s| {
            s.skills.push(skill.clone());
            Some(())
        });

        info!("Skill {} added to '{}'", skill.id, skill.category);
        skill
    }

    pub fn update_skill(&self, id: &str, patch: SkillPatch) -> Option<Skill> {
        self.inner.mutate(|s| {
            let skill = s.skills.iter_mut().find(|k| k.id == id)?;
            patch.apply(skill);
            Some(skill.clone())
        })
    }

    pub fn delete_skill(&self, id: &str) -> bool {
        self.inner
            .mutate(|s| {
                let index = s.skills.iter().position(|k| k.id == id)?;
                s.skills.remove(index);
                Some(())
            })
            .is_some()
    }

    // ── categories ──────────────────────────────────────────

    pub fn categories(&self) -> Vec<SkillCategory> {
        self.inner.read(|s| s.categories.clone())
    }

    pub fn add_category(&self, new_category: NewCategory) -> SkillCategory {
        let id = self
            .inner
            .read(|s| unique_id(|candidate| s.categories.iter().any(|c| c.id == candidate)));
        let category = new_category.into_category(id);

        self.inner.mutate(|s| {
            s.categories.push(category.clone());
            Some(())
        });

        info!("Skill category {} added", category.id);
        category
    }

    pub fn update_category(&self, id: &str, patch: CategoryPatch) -> Option<SkillCategory> {
        self.inner.mutate(|s| {
            let category = s.categories.iter_mut().find(|c| c.id == id)?;
            patch.apply(category);
            Some(category.clone())
        })
    }

    /// Removes the category only. Skills that reference it keep their
    /// `category` value and simply stop appearing in grouped views.
    pub fn delete_category(&self, id: &str) -> bool {
        self.inner
            .mutate(|s| {
                let index = s.categories.iter().position(|c| c.id == id)?;
                s.categories.remove(index);
                Some(())
            })
            .is_some()
    }

    pub fn reset(&self) {
        self.inner.reset();
        info!("Skills reset to defaults");
    }
}
