// src/shared/view/search.rs

/// Text a record exposes to free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring search over [`Searchable::search_fields`].
///
/// A blank term returns every item, in order.
pub fn search<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Same as [`search`] over an already narrowed list of references.
pub fn search_refs<'a, T: Searchable>(items: Vec<&'a T>, term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
