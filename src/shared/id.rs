// src/shared/id.rs
use uuid::Uuid;

/// Fresh v4 id that `taken` does not already know about.
pub fn unique_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let id = unique_id(|candidate| seen.contains(candidate));
            assert!(seen.insert(id));
        }
    }
}
