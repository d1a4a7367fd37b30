//! Procedure catalog records from the remote record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use visualiza_core::{ExampleId, ImageData, ProcedureId, UserId};

/// A catalog procedure (`procedures` collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    pub id: ProcedureId,
    /// Owner; absent on rows predating per-user ownership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `procedures` collection.
#[derive(Debug, Clone, Serialize)]
pub struct NewProcedure {
    pub user_id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A before/after example attached to a catalog procedure
/// (`procedure_examples` collection). Images are embedded data URIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureExample {
    pub id: ExampleId,
    pub procedure_id: ProcedureId,
    pub user_id: UserId,
    pub before_image_url: ImageData,
    pub after_image_url: ImageData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_used: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `procedure_examples` collection.
#[derive(Debug, Clone, Serialize)]
pub struct NewProcedureExample {
    pub procedure_id: ProcedureId,
    pub user_id: UserId,
    pub before_image_url: ImageData,
    pub after_image_url: ImageData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_used: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A premium recommendation procedure (`premium_procedures` collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumProcedure {
    pub id: ProcedureId,
    pub user_id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `premium_procedures` collection.
#[derive(Debug, Clone, Serialize)]
pub struct NewPremiumProcedure {
    pub user_id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Catalog procedures seeded for a user whose `procedures` collection is
/// empty.
pub const DEFAULT_PROCEDURES: &[(&str, &str)] = &[
    (
        "Botox",
        "Aplicação de toxina botulínica para suavização de rugas e linhas de expressão",
    ),
    (
        "Preenchimentos faciais",
        "Preenchimento com ácido hialurônico para harmonização facial",
    ),
    (
        "Preenchimento labial",
        "Aumento e definição dos lábios com ácido hialurônico",
    ),
    (
        "Lipo enzimática",
        "Tratamento não invasivo para redução de gordura localizada",
    ),
    (
        "Harmonização facial: Mandíbula",
        "Definição e contorno da mandíbula",
    ),
    ("Harmonização facial: Mento", "Projeção e definição do queixo"),
    (
        "Microagulhamento",
        "Tratamento para rejuvenescimento e melhora da textura da pele",
    ),
];

/// Premium recommendations seeded for a user whose `premium_procedures`
/// collection is empty.
pub const DEFAULT_PREMIUM_PROCEDURES: &[(&str, &str)] = &[
    (
        "LIMPEZA DE PELE PROFUNDA",
        "Procedimento completo de limpeza facial profunda",
    ),
    ("PEELING", "Renovação celular e rejuvenescimento da pele"),
    (
        "MICROAGULHAMENTO",
        "Estímulo de colágeno através de microagulhas",
    ),
    ("SKINBOOSTER", "Hidratação profunda com ácido hialurônico"),
    ("HIDRATAÇÃO FACIAL", "Tratamento intensivo de hidratação"),
    ("COLÁGENO", "Reposição de colágeno para firmeza da pele"),
];
