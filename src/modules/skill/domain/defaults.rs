use super::entities::{Skill, SkillCategory};

fn category(id: &str, name: &str, description: &str, order: i32) -> SkillCategory {
    SkillCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        order,
    }
}

fn skill(id: &str, name: &str, level: u8, category: &str, icon: &str, year: u16) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        level,
        category: category.to_string(),
        icon: Some(icon.to_string()),
        year: Some(year),
    }
}

pub fn default_categories() -> Vec<SkillCategory> {
    vec![
        category("frontend", "Frontend", "Interfaces that people enjoy using", 1),
        category("backend", "Backend", "Services, APIs and data", 2),
        category("devops", "DevOps", "Shipping and running software", 3),
        category("tools", "Tools", "Day to day workflow", 4),
    ]
}

pub fn default_skills() -> Vec<Skill> {
    vec![
        skill("1", "TypeScript", 90, "frontend", "typescript", 2017),
        skill("2", "React", 88, "frontend", "react", 2017),
        skill("3", "Tailwind CSS", 80, "frontend", "tailwind", 2020),
        skill("4", "Rust", 82, "backend", "rust", 2019),
        skill("5", "Node.js", 85, "backend", "nodejs", 2016),
        skill("6", "PostgreSQL", 78, "backend", "postgresql", 2016),
        skill("7", "Docker", 75, "devops", "docker", 2018),
        skill("8", "GitHub Actions", 70, "devops", "github", 2020),
        skill("9", "Git", 92, "tools", "git", 2014),
        skill("10", "Figma", 60, "tools", "figma", 2021),
    ]
}
