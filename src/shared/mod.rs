pub mod api;
pub mod id;
pub mod patch;
pub mod persistence;
pub mod remote;
pub mod view;
