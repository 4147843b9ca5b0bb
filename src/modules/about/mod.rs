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
    pub mod outgoing {
        pub mod remote_row;
    }
}

pub use application::store::AboutStore;
