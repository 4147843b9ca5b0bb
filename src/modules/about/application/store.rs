use crate::modules::about::domain::entities::AboutData;
use crate::shared::remote::ProfileStore;

/// About section content, hydrated from the `about` table.
pub type AboutStore = ProfileStore<AboutData>;
