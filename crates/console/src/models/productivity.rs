//! Practice-management entities.
//!
//! Serialized with the camelCase field names of the existing
//! `productivity_*` blobs so stored data stays readable across versions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use visualiza_core::{
    AlertId, AlertKind, AlertPriority, AppointmentId, AppointmentStatus, BadgeId, ClientId,
    StockItemId, TransactionId, TransactionKind,
};

/// A clinic client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    /// Free-form contact field; may be empty, so not an [`visualiza_core::Email`].
    pub email: String,
    pub last_visit: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_appointment: Option<NaiveDate>,
    /// Names of procedures this client has had.
    pub procedures: Vec<String>,
    pub total_spent: Decimal,
    pub notes: String,
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_name: String,
    pub procedure: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub notes: String,
}

/// A stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: StockItemId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    /// Threshold at or below which the item counts as low stock.
    pub min_quantity: u32,
    pub unit: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl StockItem {
    /// Whether this item is at or below its minimum quantity.
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}

/// A financial transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
}

/// A derived alert.
///
/// Created by the engine in reaction to a mutation; only the `read` flag
/// ever changes afterwards, and alerts are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: AlertId,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub message: String,
    pub date: NaiveDate,
    pub priority: AlertPriority,
    pub read: bool,
}

/// A gamification badge.
///
/// Monotonic: `progress` only increases, and `unlocked` never reverts to
/// false once set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    /// Progress toward the badge target, 0..=100.
    pub progress: u8,
}

impl Badge {
    fn locked(id: &str, name: &str, description: &str, icon: &str) -> Self {
        Self {
            id: BadgeId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            unlocked: false,
            progress: 0,
        }
    }
}

/// The badge set seeded for a user with no stored badges.
///
/// The fifth badge has no automatic producer yet; it ships locked.
#[must_use]
pub fn default_badges() -> Vec<Badge> {
    vec![
        Badge::locked("1", "Primeira Consulta", "Cadastre seu primeiro cliente", "🎯"),
        Badge::locked("2", "Organizador", "Complete 10 agendamentos", "📅"),
        Badge::locked("3", "Estoque Controlado", "Cadastre 5 itens no estoque", "📦"),
        Badge::locked("4", "Financeiro em Dia", "Registre 20 transações", "💰"),
        Badge::locked("5", "Mestre da Organização", "Use todas as funcionalidades", "👑"),
    ]
}
