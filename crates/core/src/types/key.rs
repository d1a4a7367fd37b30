//! Typed storage keys for per-user local persistence.
//!
//! Every locally persisted blob is addressed by a (logical key, user id)
//! pair rendered as `"{logical}_{user_id}"`. Keeping the logical keys in a
//! closed enum means a caller cannot invent an unqualified key or bypass
//! the user suffix with a typo.

use serde::{Deserialize, Serialize};

use crate::types::id::UserId;

/// Logical key for one per-user JSON blob in local storage.
///
/// The wire names match the stored layout, so data persisted by earlier
/// versions of the console remains readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKey {
    /// Before/after photo example groups, keyed by procedure name.
    PremiumExamples,
    /// The user's premium procedure-name list.
    PremiumProcedures,
    /// Whether the premium client area has been unlocked.
    PremiumClientUnlocked,
    /// Promotional procedures offered to premium clients.
    PremiumClientProcedures,
    /// Booked appointments.
    ProductivityAppointments,
    /// Registered clients.
    ProductivityClients,
    /// Stock items.
    ProductivityStock,
    /// Legacy financial records blob.
    ProductivityFinancial,
    /// Gamification badges.
    ProductivityBadges,
    /// Derived alerts.
    ProductivityAlerts,
    /// Financial transactions.
    ProductivityTransactions,
}

impl StorageKey {
    /// The logical key as stored, without the user suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PremiumExamples => "premiumExamples",
            Self::PremiumProcedures => "premiumProcedures",
            Self::PremiumClientUnlocked => "premiumClientUnlocked",
            Self::PremiumClientProcedures => "premiumClientProcedures",
            Self::ProductivityAppointments => "productivity_appointments",
            Self::ProductivityClients => "productivity_clients",
            Self::ProductivityStock => "productivity_stock",
            Self::ProductivityFinancial => "productivity_financial",
            Self::ProductivityBadges => "productivity_badges",
            Self::ProductivityAlerts => "productivity_alerts",
            Self::ProductivityTransactions => "productivity_transactions",
        }
    }

    /// Render the physical storage key for one user.
    ///
    /// Invariant: two distinct user IDs never render the same physical key.
    #[must_use]
    pub fn physical(self, user_id: &UserId) -> String {
        format!("{}_{}", self.as_str(), user_id)
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_key_format() {
        let user = UserId::new("u-42");
        assert_eq!(
            StorageKey::PremiumExamples.physical(&user),
            "premiumExamples_u-42"
        );
        assert_eq!(
            StorageKey::ProductivityClients.physical(&user),
            "productivity_clients_u-42"
        );
    }

    #[test]
    fn test_physical_keys_distinct_per_user() {
        let a = UserId::new("user-a");
        let b = UserId::new("user-b");
        for key in [
            StorageKey::PremiumExamples,
            StorageKey::PremiumProcedures,
            StorageKey::PremiumClientUnlocked,
            StorageKey::PremiumClientProcedures,
            StorageKey::ProductivityAppointments,
            StorageKey::ProductivityClients,
            StorageKey::ProductivityStock,
            StorageKey::ProductivityFinancial,
            StorageKey::ProductivityBadges,
            StorageKey::ProductivityAlerts,
            StorageKey::ProductivityTransactions,
        ] {
            assert_ne!(key.physical(&a), key.physical(&b));
        }
    }

    #[test]
    fn test_logical_keys_distinct() {
        let user = UserId::new("u");
        assert_ne!(
            StorageKey::ProductivityFinancial.physical(&user),
            StorageKey::ProductivityTransactions.physical(&user)
        );
    }
}
