use crate::modules::testimonial::domain::entities::Testimonial;
use crate::shared::view::sort_by_order;

/// Display order, ascending. Ties keep list order.
pub fn ordered(testimonials: &[Testimonial]) -> Vec<Testimonial> {
    let mut refs: Vec<&Testimonial> = testimonials.iter().collect();
    sort_by_order(&mut refs, |t| t.order);
    refs.into_iter().cloned().collect()
}

/// Only testimonials with at least `min_rating` stars.
pub fn rated_at_least(testimonials: &[Testimonial], min_rating: u8) -> Vec<Testimonial> {
    ordered(testimonials)
        .into_iter()
        .filter(|t| t.rating.is_some_and(|r| r >= min_rating))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testimonial::domain::entities::default_testimonials;

    #[test]
    fn ordered_is_stable() {
        let mut list = default_testimonials();
        list[2].order = 1;

        let ids: Vec<_> = ordered(&list).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
    }

    #[test]
    fn unrated_are_excluded_by_min_rating() {
        let ids: Vec<_> = rated_at_least(&default_testimonials(), 1)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
