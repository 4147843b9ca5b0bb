use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is a valid regex"));

const FALLBACK_SLUG: &str = "post";

/// Lowercases the title and collapses every run of non-alphanumeric
/// characters into one hyphen, trimming hyphens at both ends.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let slug = NON_ALNUM_RUN.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// First of `base`, `base-2`, `base-3`, ... that `taken` rejects.
pub fn unique_slug(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    (2u32..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & WebAssembly: 2024  "), "rust-webassembly-2024");
        assert_eq!(slugify("a---b___c"), "a-b-c");
    }

    #[test]
    fn slugify_never_returns_empty() {
        assert_eq!(slugify("!!!"), "post");
        assert_eq!(slugify(""), "post");
    }

    #[test]
    fn unique_slug_appends_counter() {
        let existing = ["intro", "intro-2"];
        assert_eq!(unique_slug("intro", |s| existing.contains(&s)), "intro-3");
        assert_eq!(unique_slug("outro", |s| existing.contains(&s)), "outro");
    }
}
