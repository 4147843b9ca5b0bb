pub mod domain {
    pub mod defaults;
    pub mod entities;
}

pub mod application {
    pub mod store;
    pub mod views;
}

pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
}

pub use application::store::{SkillStore, SkillsState};
