//! Visualiza Core - Shared types library.
//!
//! This crate provides common types used across all Visualiza components:
//! - `console` - Clinic management-console domain library
//! - `integration-tests` - Cross-module integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, storage keys,
//!   embedded image payloads, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
