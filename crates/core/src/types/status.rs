//! Status enums for various entities.
//!
//! Wire names are lowercase to match the stored layout of existing blobs
//! (`"scheduled"`, `"income"`, `"appointment"`, ...).

use serde::{Deserialize, Serialize};

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

/// Direction of a financial transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

/// Alert taxonomy.
///
/// Only `Appointment` and `Stock` are produced automatically by in-scope
/// mutations; the remaining kinds are reachable states reserved for future
/// producers (client follow-ups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// A client needs to return for evaluation.
    Return,
    /// A maintenance session is due.
    Maintenance,
    /// A follow-up session is available.
    Session,
    /// A stock item fell to or below its minimum quantity.
    Stock,
    /// An appointment was confirmed.
    Appointment,
}

/// Alert priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Return => write!(f, "return"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Session => write!(f, "session"),
            Self::Stock => write!(f, "stock"),
            Self::Appointment => write!(f, "appointment"),
        }
    }
}

impl std::str::FromStr for AlertKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "return" => Ok(Self::Return),
            "maintenance" => Ok(Self::Maintenance),
            "session" => Ok(Self::Session),
            "stock" => Ok(Self::Stock),
            "appointment" => Ok(Self::Appointment),
            _ => Err(format!("invalid alert kind: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Scheduled).unwrap(),
            "\"scheduled\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
        assert_eq!(
            serde_json::to_string(&AlertKind::Return).unwrap(),
            "\"return\""
        );
        assert_eq!(
            serde_json::to_string(&AlertPriority::High).unwrap(),
            "\"high\""
        );
    }

    #[test]
    fn test_alert_kind_roundtrip() {
        for kind in [
            AlertKind::Return,
            AlertKind::Maintenance,
            AlertKind::Session,
            AlertKind::Stock,
            AlertKind::Appointment,
        ] {
            let parsed: AlertKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_alert_kind_rejects_unknown() {
        assert!("urgent".parse::<AlertKind>().is_err());
    }
}
