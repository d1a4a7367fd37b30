//! Domain services built on the local store, engine, and record store.

pub mod auth;
pub mod gallery;
pub mod premium;
pub mod productivity;
