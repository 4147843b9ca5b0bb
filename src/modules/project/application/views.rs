use std::collections::BTreeMap;

use crate::modules::project::application::store::{ProjectStore, ProjectsState};
use crate::modules::project::domain::entities::Project;
use crate::shared::view::{search, DerivedView, Page, Searchable, Selection, DEFAULT_PAGE_SIZE};

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

#[derive(Debug, Clone)]
pub struct ProjectQuery {
    pub search: String,
    pub technology: Selection,
    pub featured_only: bool,
    pub page: usize,
    pub per_page: usize,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            technology: Selection::All,
            featured_only: false,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Search, technology filter, then pagination. Collection order is kept.
pub fn list_projects(projects: &[Project], query: &ProjectQuery) -> Page<Project> {
    let matching: Vec<&Project> = search(projects, &query.search)
        .into_iter()
        .filter(|p| {
            query
                .technology
                .matches_any(p.technologies.iter().map(String::as_str))
        })
        .filter(|p| !query.featured_only || p.featured)
        .collect();

    Page::slice(&matching, query.page, query.per_page)
}

/// Distinct technologies across all projects, sorted case-insensitively.
/// The first spelling encountered wins.
pub fn technology_index(state: &ProjectsState) -> Vec<String> {
    let mut by_key: BTreeMap<String, String> = BTreeMap::new();
    for tech in state.projects.iter().flat_map(|p| p.technologies.iter()) {
        by_key
            .entry(tech.to_lowercase())
            .or_insert_with(|| tech.clone());
    }
    by_key.into_values().collect()
}

/// Technology list that follows the store, recomputed only after changes.
pub fn technology_view(store: &ProjectStore) -> DerivedView<ProjectsState, Vec<String>> {
    DerivedView::new(store.subscribe(), technology_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::domain::entities::NewProject;
    use crate::shared::persistence::InMemoryStorage;
    use std::sync::Arc;

    fn project(id: &str, title: &str, techs: &[&str]) -> Project {
        NewProject {
            title: title.to_string(),
            description: format!("{title} description"),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
        .into_project(id.to_string())
    }

    fn catalog() -> Vec<Project> {
        (1..=13)
            .map(|n| {
                let tech = if n % 2 == 0 { "Rust" } else { "Go" };
                project(&n.to_string(), &format!("Project {n}"), &[tech, "Docker"])
            })
            .collect()
    }

    #[test]
    fn default_query_returns_first_page() {
        let projects = catalog();
        let page = list_projects(&projects, &ProjectQuery::default());

        assert_eq!(page.total, 13);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.items[0].id, "1");
    }

    #[test]
    fn search_matches_technologies_case_insensitively() {
        let projects = catalog();
        let page = list_projects(
            &projects,
            &ProjectQuery {
                search: "rUsT".to_string(),
                per_page: 50,
                ..Default::default()
            },
        );

        assert_eq!(page.total, 6);
        assert!(page.items.iter().all(|p| p.technologies.contains(&"Rust".to_string())));
    }

    #[test]
    fn technology_filter_is_exact() {
        let projects = catalog();
        let query = ProjectQuery {
            technology: Selection::Only("Go".to_string()),
            per_page: 50,
            ..Default::default()
        };

        let ids: Vec<_> = list_projects(&projects, &query)
            .items
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "3", "5", "7", "9", "11", "13"]);
    }

    #[test]
    fn featured_only_filter() {
        let mut projects = catalog();
        projects[4].featured = true;

        let page = list_projects(
            &projects,
            &ProjectQuery {
                featured_only: true,
                ..Default::default()
            },
        );
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "5");
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let projects = catalog();
        let page = list_projects(
            &projects,
            &ProjectQuery {
                page: 7,
                ..Default::default()
            },
        );

        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn technology_index_dedupes_ignoring_case() {
        let state = ProjectsState {
            projects: vec![
                project("1", "a", &["rust", "Docker"]),
                project("2", "b", &["Rust", "axum"]),
            ],
        };

        assert_eq!(technology_index(&state), vec!["axum", "Docker", "rust"]);
    }

    #[test]
    fn technology_view_follows_store() {
        let store = ProjectStore::load(Arc::new(InMemoryStorage::new()));
        let mut view = technology_view(&store);
        assert!(!view.get().contains(&"Elixir".to_string()));

        store.add(NewProject {
            title: "Chat".to_string(),
            description: "Phoenix chat".to_string(),
            technologies: vec!["Elixir".to_string()],
            ..Default::default()
        });

        assert!(view.get().contains(&"Elixir".to_string()));
        assert_eq!(view.computations(), 2);
    }
}
