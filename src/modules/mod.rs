pub mod about;
pub mod blog;
pub mod hero;
pub mod preferences;
pub mod project;
pub mod resume;
pub mod skill;
pub mod testimonial;
