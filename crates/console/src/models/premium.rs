//! Locally persisted premium-area entities.
//!
//! These live in the namespaced local store, not the remote record store;
//! field names follow the stored snake_case layout.

use serde::{Deserialize, Serialize};

use visualiza_core::{ExampleId, ImageData, ProcedureId};

/// A before/after photo example in the premium gallery.
///
/// Owned by the procedure-name group that holds it; deleted by removing
/// its ID from that group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoExample {
    pub id: ExampleId,
    pub before_image_url: ImageData,
    pub after_image_url: ImageData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_used: Option<f64>,
    pub notes: String,
}

/// A promotional procedure offered to premium clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumClientProcedure {
    pub id: ProcedureId,
    pub name: String,
    /// Display text for the discount, e.g. `"20%"`.
    pub discount: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_image_url: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_image_url: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_used: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Premium procedure names seeded for a user with no stored list.
pub const DEFAULT_PREMIUM_PROCEDURE_NAMES: &[&str] = &[
    "LIMPEZA DE PELE PROFUNDA",
    "PEELING",
    "MICROAGULHAMENTO",
    "SKINBOOSTER",
    "HIDRATAÇÃO FACIAL",
    "COLÁGENO",
];
