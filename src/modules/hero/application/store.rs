use crate::modules::hero::domain::entities::HeroData;
use crate::shared::remote::ProfileStore;

/// Hero section content, hydrated from the `hero` table.
pub type HeroStore = ProfileStore<HeroData>;
