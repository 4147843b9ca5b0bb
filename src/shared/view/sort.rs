// src/shared/view/sort.rs
use std::cmp::Reverse;

/// Newest first. Stable: items with equal dates keep their relative order.
pub fn sort_by_date_desc<T, K, F>(items: &mut [&T], date: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by_key(|item| Reverse(date(*item)));
}

/// Ascending by an explicit display order. Stable on ties.
pub fn sort_by_order<T, F>(items: &mut [&T], order: F)
where
    F: Fn(&T) -> i32,
{
    items.sort_by_key(|item| order(*item));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct Entry {
        id: &'static str,
        order: i32,
        date: NaiveDate,
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { id: "a", order: 2, date: d(2023, 1, 1) },
            Entry { id: "b", order: 1, date: d(2024, 5, 1) },
            Entry { id: "c", order: 2, date: d(2024, 5, 1) },
            Entry { id: "d", order: 0, date: d(2022, 3, 9) },
        ]
    }

    #[test]
    fn date_desc_is_stable_on_ties() {
        let entries = entries();
        let mut refs: Vec<&Entry> = entries.iter().collect();
        sort_by_date_desc(&mut refs, |e| e.date);

        let ids: Vec<_> = refs.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn order_asc_is_stable_on_ties() {
        let entries = entries();
        let mut refs: Vec<&Entry> = entries.iter().collect();
        sort_by_order(&mut refs, |e| e.order);

        let ids: Vec<_> = refs.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
    }
}
