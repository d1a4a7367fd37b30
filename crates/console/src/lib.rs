//! Visualiza Console library.
//!
//! The clinic management-console domain layer: per-user namespaced local
//! persistence, the bounded photo-gallery writer, derived alerts and badge
//! progress, the session user context, and the remote record store client.
//!
//! Rendering, routing, and the remote table service itself are external
//! collaborators; this crate owns the state they read and write.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod remote;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{ConsoleError, Result};
