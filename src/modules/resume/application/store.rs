use crate::modules::resume::domain::entities::ResumeData;
use crate::shared::remote::ProfileStore;

/// Resume content, hydrated from the `resume` table.
pub type ResumeStore = ProfileStore<ResumeData>;
