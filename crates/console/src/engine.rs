//! Derived state engine.
//!
//! Pure functions from a mutation to its derived state: zero-or-one new
//! [`Alert`] and the updated badge set. No I/O happens here; the
//! productivity tracker persists what these functions return, which keeps
//! the rules testable without any rendering or storage.

use chrono::NaiveDate;

use visualiza_core::{AlertId, AlertKind, AlertPriority};

use crate::models::productivity::{Alert, Badge};

/// A state mutation the engine reacts to.
///
/// Carries only the fields the derivation rules read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// A client was registered.
    ClientAdded,
    /// An appointment was booked.
    AppointmentBooked {
        client_name: String,
        date: NaiveDate,
    },
    /// A stock item was inserted.
    StockItemAdded {
        name: String,
        quantity: u32,
        min_quantity: u32,
    },
    /// A financial transaction was recorded.
    TransactionRecorded,
}

/// The collection a badge tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTrack {
    Clients,
    Appointments,
    Stock,
    Transactions,
}

impl BadgeTrack {
    /// The stored badge ID this track advances.
    const fn badge_id(self) -> &'static str {
        match self {
            Self::Clients => "1",
            Self::Appointments => "2",
            Self::Stock => "3",
            Self::Transactions => "4",
        }
    }

    /// Collection size at which the badge unlocks.
    const fn target(self) -> usize {
        match self {
            Self::Clients => 1,
            Self::Appointments => 10,
            Self::Stock => 5,
            Self::Transactions => 20,
        }
    }
}

/// Derive the alert a mutation produces, if any.
///
/// Rules are evaluated once per mutation, never retroactively:
/// - a booked appointment always produces a high-priority confirmation;
/// - an inserted stock item at or below its minimum produces a
///   high-priority low-stock alert.
///
/// `today` becomes the alert's date.
#[must_use]
pub fn derive_alert(mutation: &Mutation, today: NaiveDate) -> Option<Alert> {
    match mutation {
        Mutation::AppointmentBooked { client_name, date } => Some(new_alert(
            AlertKind::Appointment,
            client_name,
            &date.to_string(),
            today,
        )),
        Mutation::StockItemAdded {
            name,
            quantity,
            min_quantity,
        } if quantity <= min_quantity => {
            Some(new_alert(AlertKind::Stock, name, "", today))
        }
        Mutation::StockItemAdded { .. }
        | Mutation::ClientAdded
        | Mutation::TransactionRecorded => None,
    }
}

/// Message and priority for an alert of `kind` about `name`.
///
/// Covers the full alert taxonomy; `return`/`maintenance`/`session` have
/// no automatic producer yet but future producers share the templates.
#[must_use]
pub fn alert_content(kind: AlertKind, name: &str, date: &str) -> (String, AlertPriority) {
    match kind {
        AlertKind::Appointment => (
            format!("Agendamento confirmado para {name} em {date}"),
            AlertPriority::High,
        ),
        AlertKind::Stock => (format!("Estoque baixo: {name}"), AlertPriority::High),
        AlertKind::Return => (
            format!("{name} precisa retornar para avaliação"),
            AlertPriority::Medium,
        ),
        AlertKind::Maintenance => (
            format!("{name} - manutenção agendada"),
            AlertPriority::Medium,
        ),
        AlertKind::Session => (
            format!("{name} - segunda sessão disponível"),
            AlertPriority::Low,
        ),
    }
}

fn new_alert(kind: AlertKind, name: &str, date: &str, today: NaiveDate) -> Alert {
    let (message, priority) = alert_content(kind, name, date);
    Alert {
        id: AlertId::mint(),
        kind,
        client_name: Some(name.to_owned()),
        message,
        date: today,
        priority,
        read: false,
    }
}

/// Advance badge progress for `track` against the post-mutation `count`.
///
/// Ratchet semantics: progress never decreases and `unlocked` never
/// reverts, so recomputing with a lower count after a deletion leaves an
/// earned badge earned. Returns the names of badges that unlocked on this
/// call - the caller's one-time notification side effect.
pub fn advance_badges(badges: &mut [Badge], track: BadgeTrack, count: usize) -> Vec<String> {
    let target = track.target();
    let progress = u8::try_from((count * 100 / target).min(100)).unwrap_or(100);

    let mut unlocked_now = Vec::new();
    for badge in badges
        .iter_mut()
        .filter(|b| b.id.as_str() == track.badge_id())
    {
        badge.progress = badge.progress.max(progress);
        if count >= target && !badge.unlocked {
            badge.unlocked = true;
            tracing::info!(badge = %badge.name, "badge unlocked");
            unlocked_now.push(badge.name.clone());
        }
    }
    unlocked_now
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use crate::models::productivity::default_badges;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn test_appointment_produces_confirmation_alert() {
        let mutation = Mutation::AppointmentBooked {
            client_name: "Ana".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(),
        };

        let alert = derive_alert(&mutation, today()).unwrap();
        assert_eq!(alert.kind, AlertKind::Appointment);
        assert_eq!(alert.priority, AlertPriority::High);
        assert_eq!(alert.message, "Agendamento confirmado para Ana em 2026-09-02");
        assert_eq!(alert.date, today());
        assert!(!alert.read);
    }

    #[test]
    fn test_low_stock_produces_alert() {
        let mutation = Mutation::StockItemAdded {
            name: "Ácido hialurônico".to_string(),
            quantity: 5,
            min_quantity: 10,
        };

        let alert = derive_alert(&mutation, today()).unwrap();
        assert_eq!(alert.kind, AlertKind::Stock);
        assert_eq!(alert.priority, AlertPriority::High);
        assert_eq!(alert.message, "Estoque baixo: Ácido hialurônico");
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let at_minimum = Mutation::StockItemAdded {
            name: "Agulha".to_string(),
            quantity: 10,
            min_quantity: 10,
        };
        assert!(derive_alert(&at_minimum, today()).is_some());

        let above_minimum = Mutation::StockItemAdded {
            name: "Agulha".to_string(),
            quantity: 20,
            min_quantity: 10,
        };
        assert!(derive_alert(&above_minimum, today()).is_none());
    }

    #[test]
    fn test_clients_and_transactions_produce_no_alert() {
        assert!(derive_alert(&Mutation::ClientAdded, today()).is_none());
        assert!(derive_alert(&Mutation::TransactionRecorded, today()).is_none());
    }

    #[test]
    fn test_alert_content_covers_taxonomy() {
        let (message, priority) = alert_content(AlertKind::Return, "Bia", "");
        assert_eq!(message, "Bia precisa retornar para avaliação");
        assert_eq!(priority, AlertPriority::Medium);

        let (message, priority) = alert_content(AlertKind::Session, "Bia", "");
        assert_eq!(message, "Bia - segunda sessão disponível");
        assert_eq!(priority, AlertPriority::Low);

        let (message, priority) = alert_content(AlertKind::Maintenance, "Bia", "");
        assert_eq!(message, "Bia - manutenção agendada");
        assert_eq!(priority, AlertPriority::Medium);
    }

    #[test]
    fn test_first_client_unlocks_immediately() {
        let mut badges = default_badges();
        let unlocked = advance_badges(&mut badges, BadgeTrack::Clients, 1);
        assert_eq!(unlocked, vec!["Primeira Consulta".to_string()]);

        let badge = badges.iter().find(|b| b.id.as_str() == "1").unwrap();
        assert!(badge.unlocked);
        assert_eq!(badge.progress, 100);
    }

    #[test]
    fn test_organizador_unlocks_exactly_at_ten() {
        let mut badges = default_badges();

        for count in 1..10 {
            let unlocked = advance_badges(&mut badges, BadgeTrack::Appointments, count);
            assert!(unlocked.is_empty(), "unlocked early at {count}");
        }
        let badge = badges.iter().find(|b| b.id.as_str() == "2").unwrap();
        assert!(!badge.unlocked);
        assert_eq!(badge.progress, 90);

        let unlocked = advance_badges(&mut badges, BadgeTrack::Appointments, 10);
        assert_eq!(unlocked, vec!["Organizador".to_string()]);
        let badge = badges.iter().find(|b| b.id.as_str() == "2").unwrap();
        assert_eq!(badge.progress, 100);

        // The unlock notification fires exactly once.
        let again = advance_badges(&mut badges, BadgeTrack::Appointments, 11);
        assert!(again.is_empty());
    }

    #[test]
    fn test_ratchet_never_relocks_or_regresses() {
        let mut badges = default_badges();
        advance_badges(&mut badges, BadgeTrack::Appointments, 10);

        // Deleting appointments afterwards must not re-lock the badge.
        let unlocked = advance_badges(&mut badges, BadgeTrack::Appointments, 3);
        assert!(unlocked.is_empty());
        let badge = badges.iter().find(|b| b.id.as_str() == "2").unwrap();
        assert!(badge.unlocked);
        assert_eq!(badge.progress, 100);
    }

    #[test]
    fn test_stock_and_transaction_targets() {
        let mut badges = default_badges();

        advance_badges(&mut badges, BadgeTrack::Stock, 2);
        let badge = badges.iter().find(|b| b.id.as_str() == "3").unwrap();
        assert_eq!(badge.progress, 40);

        let unlocked = advance_badges(&mut badges, BadgeTrack::Stock, 5);
        assert_eq!(unlocked, vec!["Estoque Controlado".to_string()]);

        advance_badges(&mut badges, BadgeTrack::Transactions, 15);
        let badge = badges.iter().find(|b| b.id.as_str() == "4").unwrap();
        assert_eq!(badge.progress, 75);
        assert!(!badge.unlocked);

        let unlocked = advance_badges(&mut badges, BadgeTrack::Transactions, 20);
        assert_eq!(unlocked, vec!["Financeiro em Dia".to_string()]);
    }

    #[test]
    fn test_unrelated_badges_untouched() {
        let mut badges = default_badges();
        advance_badges(&mut badges, BadgeTrack::Clients, 1);

        let master = badges.iter().find(|b| b.id.as_str() == "5").unwrap();
        assert!(!master.unlocked);
        assert_eq!(master.progress, 0);
    }
}
