use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use crate::modules::project::domain::defaults::default_projects;
use crate::modules::project::domain::entities::{NewProject, Project, ProjectPatch};
use crate::shared::id::unique_id;
use crate::shared::persistence::{KeyValueStorage, PersistedStore, Seed, StorageError};

pub const STORAGE_KEY: &str = "portfolio-projects";
pub const STORAGE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            projects: default_projects(),
        }
    }
}

/// Persisted collection of portfolio projects.
///
/// Unknown ids are silent no-ops: `update` returns `None`, `delete` `false`.
pub struct ProjectStore {
    inner: PersistedStore<ProjectsState>,
}

impl ProjectStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: PersistedStore::load(
                storage,
                STORAGE_KEY,
                STORAGE_VERSION,
                ProjectsState::default(),
            ),
        }
    }

    pub fn seed() -> Result<Seed, StorageError> {
        Seed::new(STORAGE_KEY, STORAGE_VERSION, &ProjectsState::default())
    }

    pub fn all(&self) -> Vec<Project> {
        self.inner.read(|s| s.projects.clone())
    }

    pub fn read<R>(&self, f: impl FnOnce(&[Project]) -> R) -> R {
        self.inner.read(|s| f(&s.projects))
    }

    pub fn subscribe(&self) -> watch::Receiver<ProjectsState> {
        self.inner.subscribe()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Project> {
        self.inner
            .read(|s| s.projects.iter().find(|p| p.id == id).cloned())
    }

    pub fn add(&self, new_project: NewProject) -> Project {
        let id = self
            .inner
            .read(|s| unique_id(|candidate| s.projects.iter().any(|p| p.id == candidate)));
        let project = new_project.into_project(id);

        self.inner.mutate(|s| {
            s.projects.push(project.clone());
            Some(())
        });

        info!("Project {} added", project.id);
        project
    }

    pub fn update(&self, id: &str, patch: ProjectPatch) -> Option<Project> {
        self.inner.mutate(|s| {
            let project = s.projects.iter_mut().find(|p| p.id == id)?;
            patch.apply(project);
            Some(project.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.inner
            .mutate(|s| {
                let index = s.projects.iter().position(|p| p.id == id)?;
                s.projects.remove(index);
                Some(())
            })
            .is_some()
    }

    pub fn reset(&self) {
        self.inner.reset();
        info!("Projects reset to defaults");
    }
}
