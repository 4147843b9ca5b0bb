use std::collections::BTreeSet;

use crate::modules::blog::application::store::BlogState;
use crate::modules::blog::domain::entities::{BlogPost, ExternalBlogPost};
use crate::shared::view::{search, sort_by_date_desc, Page, Searchable, Selection, DEFAULT_PAGE_SIZE};

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct BlogQuery {
    pub search: String,
    pub tag: Selection,
    pub page: usize,
    pub per_page: usize,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            tag: Selection::All,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Search, tag filter, newest first, then pagination.
pub fn list_posts(posts: &[BlogPost], query: &BlogQuery) -> Page<BlogPost> {
    let mut matching: Vec<&BlogPost> = search(posts, &query.search)
        .into_iter()
        .filter(|p| query.tag.matches_any(p.tags.iter().map(String::as_str)))
        .collect();
    sort_by_date_desc(&mut matching, |p| p.date);

    Page::slice(&matching, query.page, query.per_page)
}

/// Every tag in use, sorted and deduplicated.
pub fn all_tags(state: &BlogState) -> Vec<String> {
    state
        .posts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn external_newest_first(posts: &[ExternalBlogPost]) -> Vec<ExternalBlogPost> {
    let mut sorted: Vec<&ExternalBlogPost> = posts.iter().collect();
    sort_by_date_desc(&mut sorted, |p| p.date);
    sorted.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(id: &str, title: &str, date: (i32, u32, u32), tags: &[&str]) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            slug: id.to_string(),
            excerpt: format!("About {title}"),
            content: "body".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            author: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn posts() -> Vec<BlogPost> {
        vec![
            post("a", "Tokio internals", (2023, 1, 10), &["rust", "async"]),
            post("b", "CSS grid", (2024, 2, 1), &["css"]),
            post("c", "Axum vs Actix", (2024, 2, 1), &["rust"]),
            post("d", "Why I blog", (2022, 7, 4), &[]),
        ]
    }

    fn ids(page: &Page<BlogPost>) -> Vec<&str> {
        page.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn newest_first_with_stable_ties() {
        let posts = posts();
        let page = list_posts(&posts, &BlogQuery::default());
        assert_eq!(ids(&page), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn tag_filter_then_sort() {
        let posts = posts();
        let page = list_posts(
            &posts,
            &BlogQuery {
                tag: Selection::Only("rust".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ids(&page), vec!["c", "a"]);
    }

    #[test]
    fn search_hits_excerpt() {
        let posts = posts();
        let page = list_posts(
            &posts,
            &BlogQuery {
                search: "about css".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(ids(&page), vec!["b"]);
    }

    #[test]
    fn paginates_after_sorting() {
        let posts = posts();
        let page = list_posts(
            &posts,
            &BlogQuery {
                page: 2,
                per_page: 3,
                ..Default::default()
            },
        );
        assert_eq!(page.total_pages, 2);
        assert_eq!(ids(&page), vec!["d"]);
    }

    #[test]
    fn tags_are_distinct_and_sorted() {
        let state = BlogState {
            posts: posts(),
            external_posts: vec![],
        };
        assert_eq!(all_tags(&state), vec!["async", "css", "rust"]);
    }
}
