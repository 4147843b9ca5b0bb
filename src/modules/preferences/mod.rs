pub mod domain {
    pub mod entities;
}

pub mod application {
    pub mod store;
}

pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
}

pub use application::store::PreferencesStore;
