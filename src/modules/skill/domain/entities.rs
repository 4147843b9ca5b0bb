use serde::{Deserialize, Serialize};

use crate::shared::patch::PatchField;

pub const MAX_LEVEL: u8 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: u8,
    /// Id of a [`SkillCategory`]. Not checked against the category list.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct NewSkill {
    pub name: String,
    pub level: u8,
    pub category: String,
    pub icon: Option<String>,
    pub year: Option<u16>,
}

impl NewSkill {
    pub fn into_skill(self, id: String) -> Skill {
        Skill {
            id,
            name: self.name,
            level: self.level,
            category: self.category,
            icon: self.icon,
            year: self.year,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
    pub category: Option<String>,
    pub icon: PatchField<String>,
    pub year: PatchField<u16>,
}

impl SkillPatch {
    pub fn apply(self, skill: &mut Skill) {
        if let Some(name) = self.name {
            skill.name = name;
        }
        if let Some(level) = self.level {
            skill.level = level;
        }
        if let Some(category) = self.category {
            skill.category = category;
        }
        self.icon.apply_to_option(&mut skill.icon);
        self.year.apply_to_option(&mut skill.year);
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub order: i32,
}

impl NewCategory {
    pub fn into_category(self, id: String) -> SkillCategory {
        SkillCategory {
            id,
            name: self.name,
            description: self.description,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: PatchField<String>,
    pub order: Option<i32>,
}

impl CategoryPatch {
    pub fn apply(self, category: &mut SkillCategory) {
        if let Some(name) = self.name {
            category.name = name;
        }
        self.description.apply_to_option(&mut category.description);
        if let Some(order) = self.order {
            category.order = order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_patch_clears_year_and_keeps_level() {
        let mut skill = NewSkill {
            name: "Rust".to_string(),
            level: 85,
            category: "backend".to_string(),
            icon: None,
            year: Some(2019),
        }
        .into_skill("s1".to_string());

        SkillPatch {
            year: PatchField::Null,
            ..Default::default()
        }
        .apply(&mut skill);

        assert_eq!(skill.year, None);
        assert_eq!(skill.level, 85);
    }

    #[test]
    fn category_order_defaults_to_zero_when_missing() {
        let category: SkillCategory =
            serde_json::from_str(r#"{"id":"x","name":"Misc"}"#).unwrap();
        assert_eq!(category.order, 0);
        assert_eq!(category.description, None);
    }
}
