use chrono::NaiveDate;

use super::entities::{BlogPost, ExternalBlogPost};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn default_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "Building a Portfolio That Maintains Itself".to_string(),
            slug: "building-a-portfolio-that-maintains-itself".to_string(),
            excerpt: "How I moved every section of this site behind a tiny content API."
                .to_string(),
            content: "## Why\n\nEditing HTML for every new project got old fast.\n\n\
                      ## How\n\nEach section is a store with its own defaults, \
                      persisted locally and optionally synced to a hosted database."
                .to_string(),
            date: day(2024, 5, 14),
            author: Some("Alex Morgan".to_string()),
            tags: tags(&["architecture", "portfolio"]),
        },
        BlogPost {
            id: "2".to_string(),
            title: "Optimistic Updates Without Tears".to_string(),
            slug: "optimistic-updates-without-tears".to_string(),
            excerpt: "Show the change now, roll it back if the server says no.".to_string(),
            content: "Optimistic updates feel instant. The trick is keeping a snapshot \
                      and ignoring responses that arrive after a newer request."
                .to_string(),
            date: day(2024, 2, 3),
            author: Some("Alex Morgan".to_string()),
            tags: tags(&["state", "ux"]),
        },
        BlogPost {
            id: "3".to_string(),
            title: "Pagination Edge Cases".to_string(),
            slug: "pagination-edge-cases".to_string(),
            excerpt: "Empty lists, last pages and filters that shrink the result set."
                .to_string(),
            content: "Clamp the page whenever the total changes and reset to page one \
                      when filters change."
                .to_string(),
            date: day(2023, 11, 20),
            author: None,
            tags: tags(&["ux"]),
        },
    ]
}

pub fn default_external_posts() -> Vec<ExternalBlogPost> {
    vec![
        ExternalBlogPost {
            id: "ext-1".to_string(),
            title: "Ten Lessons From Shipping Side Projects".to_string(),
            excerpt: "What a decade of weekend projects taught me about scope.".to_string(),
            url: "https://dev.to/example/ten-lessons".to_string(),
            date: day(2024, 4, 2),
            source: "dev.to".to_string(),
        },
        ExternalBlogPost {
            id: "ext-2".to_string(),
            title: "A Practical Guide to Accessible Forms".to_string(),
            excerpt: "Labels, errors and focus management that actually help.".to_string(),
            url: "https://medium.com/@example/accessible-forms".to_string(),
            date: day(2023, 9, 18),
            source: "Medium".to_string(),
        },
    ]
}
