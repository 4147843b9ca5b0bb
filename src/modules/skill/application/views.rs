use serde::Serialize;

use crate::modules::skill::application::store::SkillsState;
use crate::modules::skill::domain::entities::{Skill, SkillCategory};
use crate::shared::view::{filter_selected, search, sort_by_order, Searchable, Selection};

impl Searchable for Skill {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

/// Categories by ascending `order`; equal orders keep insertion order.
pub fn sorted_categories(categories: &[SkillCategory]) -> Vec<&SkillCategory> {
    let mut sorted: Vec<&SkillCategory> = categories.iter().collect();
    sort_by_order(&mut sorted, |c| c.order);
    sorted
}

pub fn filter_skills<'a>(skills: &'a [Skill], term: &str, category: &Selection) -> Vec<&'a Skill> {
    filter_selected(search(skills, term), category, |s| s.category.as_str())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

/// One group per category in display order. Skills whose category no
/// longer exists are not listed.
pub fn grouped(state: &SkillsState) -> Vec<SkillGroup> {
    sorted_categories(&state.categories)
        .into_iter()
        .map(|category| SkillGroup {
            category: category.clone(),
            skills: state
                .skills
                .iter()
                .filter(|s| s.category == category.id)
                .cloned()
                .collect(),
        })
        .collect()
}
