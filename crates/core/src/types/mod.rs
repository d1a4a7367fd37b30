//! Core type definitions.
//!
//! All types here are plain data: serde-friendly, no I/O.

pub mod email;
pub mod id;
pub mod image;
pub mod key;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{
    AlertId, AppointmentId, BadgeId, ClientId, ExampleId, ProcedureId, StockItemId, TransactionId,
    UserId,
};
pub use image::{ImageData, ImageDataError};
pub use key::StorageKey;
pub use status::{AlertKind, AlertPriority, AppointmentStatus, TransactionKind};
