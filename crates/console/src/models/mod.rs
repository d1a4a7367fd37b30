//! Domain models.
//!
//! Serde layouts follow the stored data: productivity entities use the
//! camelCase field names of the existing local blobs, remote records use
//! the record store's snake_case columns.

pub mod catalog;
pub mod premium;
pub mod productivity;
pub mod session;
pub mod user;
