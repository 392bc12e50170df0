pub mod config;
pub mod error;
pub mod routes;
pub mod identity;
pub mod guard;
pub mod store;
pub mod provision;
pub mod gate;
