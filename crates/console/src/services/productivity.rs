//! Productivity tracker: clients, appointments, stock, finances, and the
//! alerts/badges derived from them.
//!
//! All six collections live in the user's namespaced local store. Every
//! mutation validates its input, persists the touched collection, runs the
//! derivation engine, persists the derived state, and reports what the
//! engine produced through a [`MutationReceipt`] so the caller can surface
//! notifications exactly once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use visualiza_core::{
    AlertId, AppointmentId, AppointmentStatus, ClientId, StockItemId, StorageKey, TransactionId,
    TransactionKind, UserId,
};

use crate::engine::{self, BadgeTrack, Mutation};
use crate::error::{ConsoleError, Result};
use crate::models::productivity::{
    Alert, Appointment, Badge, Client, StockItem, Transaction, default_badges,
};
use crate::storage::NamespacedStore;

/// What a mutation derived: at most one alert, plus any badges that
/// unlocked on this call.
#[derive(Debug, Clone)]
pub struct MutationReceipt {
    pub alert: Option<Alert>,
    pub unlocked: Vec<String>,
}

/// Input for registering a client.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

/// Input for booking an appointment.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub client_name: String,
    pub procedure: String,
    pub date: NaiveDate,
    pub time: String,
    pub notes: String,
}

/// Input for inserting a stock item.
#[derive(Debug, Clone)]
pub struct NewStockItem {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub min_quantity: u32,
    pub unit: String,
    pub price: Decimal,
    pub expiry_date: Option<NaiveDate>,
}

/// Input for recording a transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    /// Defaults to today when absent.
    pub date: Option<NaiveDate>,
    pub category: String,
}

/// Aggregates shown on the dashboard, recomputed from the collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
    /// Appointments scheduled for today and not yet completed or cancelled.
    pub todays_appointments: usize,
    pub low_stock_items: usize,
    pub unread_alerts: usize,
}

/// Per-user productivity data over the namespaced local store.
pub struct ProductivityTracker {
    store: NamespacedStore,
    user_id: UserId,
    clients: Vec<Client>,
    appointments: Vec<Appointment>,
    stock: Vec<StockItem>,
    transactions: Vec<Transaction>,
    alerts: Vec<Alert>,
    badges: Vec<Badge>,
}

impl ProductivityTracker {
    /// Load the user's collections. Absent or malformed blobs start
    /// empty; badges start from the default set.
    #[must_use]
    pub fn load(store: NamespacedStore, user_id: UserId) -> Self {
        let clients = store
            .load(StorageKey::ProductivityClients, &user_id)
            .unwrap_or_default();
        let appointments = store
            .load(StorageKey::ProductivityAppointments, &user_id)
            .unwrap_or_default();
        let stock = store
            .load(StorageKey::ProductivityStock, &user_id)
            .unwrap_or_default();
        let transactions = store
            .load(StorageKey::ProductivityTransactions, &user_id)
            .unwrap_or_default();
        let alerts = store
            .load(StorageKey::ProductivityAlerts, &user_id)
            .unwrap_or_default();
        let badges = store
            .load(StorageKey::ProductivityBadges, &user_id)
            .unwrap_or_else(default_badges);
        Self {
            store,
            user_id,
            clients,
            appointments,
            stock,
            transactions,
            alerts,
            badges,
        }
    }

    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    #[must_use]
    pub fn stock(&self) -> &[StockItem] {
        &self.stock
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Register a client. `today` becomes their last-visit date.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Validation` when the name is blank, or a
    /// storage error.
    pub fn add_client(&mut self, new: NewClient, today: NaiveDate) -> Result<MutationReceipt> {
        if new.name.trim().is_empty() {
            return Err(ConsoleError::missing_field("name"));
        }

        self.clients.push(Client {
            id: ClientId::mint(),
            name: new.name,
            phone: new.phone,
            email: new.email,
            last_visit: today,
            next_appointment: None,
            procedures: Vec::new(),
            total_spent: Decimal::ZERO,
            notes: new.notes,
        });
        self.store
            .save(StorageKey::ProductivityClients, &self.user_id, &self.clients)?;

        self.derive(&Mutation::ClientAdded, BadgeTrack::Clients, self.clients.len(), today)
    }

    /// Book an appointment, producing its confirmation alert.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Validation` when the client name, procedure,
    /// or time is blank, or a storage error.
    pub fn book_appointment(
        &mut self,
        new: NewAppointment,
        today: NaiveDate,
    ) -> Result<MutationReceipt> {
        if new.client_name.trim().is_empty() {
            return Err(ConsoleError::missing_field("clientName"));
        }
        if new.procedure.trim().is_empty() {
            return Err(ConsoleError::missing_field("procedure"));
        }
        if new.time.trim().is_empty() {
            return Err(ConsoleError::missing_field("time"));
        }

        let mutation = Mutation::AppointmentBooked {
            client_name: new.client_name.clone(),
            date: new.date,
        };
        self.appointments.push(Appointment {
            id: AppointmentId::mint(),
            client_name: new.client_name,
            procedure: new.procedure,
            date: new.date,
            time: new.time,
            status: AppointmentStatus::Scheduled,
            notes: new.notes,
        });
        self.store.save(
            StorageKey::ProductivityAppointments,
            &self.user_id,
            &self.appointments,
        )?;

        self.derive(&mutation, BadgeTrack::Appointments, self.appointments.len(), today)
    }

    /// Insert a stock item, producing a low-stock alert when it arrives
    /// at or below its minimum.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Validation` when the name is blank, or a
    /// storage error.
    pub fn add_stock_item(
        &mut self,
        new: NewStockItem,
        today: NaiveDate,
    ) -> Result<MutationReceipt> {
        if new.name.trim().is_empty() {
            return Err(ConsoleError::missing_field("name"));
        }

        let mutation = Mutation::StockItemAdded {
            name: new.name.clone(),
            quantity: new.quantity,
            min_quantity: new.min_quantity,
        };
        self.stock.push(StockItem {
            id: StockItemId::mint(),
            name: new.name,
            category: new.category,
            quantity: new.quantity,
            min_quantity: new.min_quantity,
            unit: new.unit,
            price: new.price,
            expiry_date: new.expiry_date,
        });
        self.store
            .save(StorageKey::ProductivityStock, &self.user_id, &self.stock)?;

        self.derive(&mutation, BadgeTrack::Stock, self.stock.len(), today)
    }

    /// Record a financial transaction.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Validation` when the description is blank,
    /// or a storage error.
    pub fn record_transaction(
        &mut self,
        new: NewTransaction,
        today: NaiveDate,
    ) -> Result<MutationReceipt> {
        if new.description.trim().is_empty() {
            return Err(ConsoleError::missing_field("description"));
        }

        self.transactions.push(Transaction {
            id: TransactionId::mint(),
            kind: new.kind,
            description: new.description,
            amount: new.amount,
            date: new.date.unwrap_or(today),
            category: new.category,
        });
        self.store.save(
            StorageKey::ProductivityTransactions,
            &self.user_id,
            &self.transactions,
        )?;

        self.derive(
            &Mutation::TransactionRecorded,
            BadgeTrack::Transactions,
            self.transactions.len(),
            today,
        )
    }

    /// Mark the alert with `id` as read.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the alerts cannot be persisted.
    pub fn mark_alert_read(&mut self, id: &AlertId) -> Result<()> {
        for alert in &mut self.alerts {
            if alert.id == *id {
                alert.read = true;
            }
        }
        self.store
            .save(StorageKey::ProductivityAlerts, &self.user_id, &self.alerts)
            .map_err(Into::into)
    }

    /// Recompute the dashboard aggregates.
    #[must_use]
    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        let revenue: Decimal = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let expenses: Decimal = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();
        DashboardSummary {
            revenue,
            expenses,
            profit: revenue - expenses,
            todays_appointments: self
                .appointments
                .iter()
                .filter(|a| a.date == today && a.status == AppointmentStatus::Scheduled)
                .count(),
            low_stock_items: self.stock.iter().filter(|item| item.is_low()).count(),
            unread_alerts: self.alerts.iter().filter(|a| !a.read).count(),
        }
    }

    /// Run the engine for one mutation and persist the derived state.
    fn derive(
        &mut self,
        mutation: &Mutation,
        track: BadgeTrack,
        count: usize,
        today: NaiveDate,
    ) -> Result<MutationReceipt> {
        let alert = engine::derive_alert(mutation, today);
        if let Some(alert) = &alert {
            self.alerts.push(alert.clone());
            self.store
                .save(StorageKey::ProductivityAlerts, &self.user_id, &self.alerts)?;
        }

        let unlocked = engine::advance_badges(&mut self.badges, track, count);
        self.store
            .save(StorageKey::ProductivityBadges, &self.user_id, &self.badges)?;

        Ok(MutationReceipt { alert, unlocked })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use visualiza_core::AlertKind;

    use crate::storage::memory::MemoryBackend;

    fn tracker_on(backend: Arc<MemoryBackend>) -> ProductivityTracker {
        ProductivityTracker::load(NamespacedStore::new(backend), UserId::new("u1"))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn client(name: &str) -> NewClient {
        NewClient {
            name: name.to_owned(),
            ..NewClient::default()
        }
    }

    fn appointment(client_name: &str, date: NaiveDate) -> NewAppointment {
        NewAppointment {
            client_name: client_name.to_owned(),
            procedure: "Botox".to_owned(),
            date,
            time: "14:30".to_owned(),
            notes: String::new(),
        }
    }

    fn stock_item(name: &str, quantity: u32, min_quantity: u32) -> NewStockItem {
        NewStockItem {
            name: name.to_owned(),
            category: "Injetáveis".to_owned(),
            quantity,
            min_quantity,
            unit: "un".to_owned(),
            price: "120.00".parse().unwrap(),
            expiry_date: None,
        }
    }

    fn transaction(kind: TransactionKind, amount: &str) -> NewTransaction {
        NewTransaction {
            kind,
            description: "Sessão".to_owned(),
            amount: amount.parse().unwrap(),
            date: None,
            category: "Procedimentos".to_owned(),
        }
    }

    #[test]
    fn test_first_client_unlocks_badge() {
        let mut tracker = tracker_on(Arc::new(MemoryBackend::unbounded()));
        let receipt = tracker.add_client(client("Ana"), today()).unwrap();

        assert!(receipt.alert.is_none());
        assert_eq!(receipt.unlocked, vec!["Primeira Consulta".to_owned()]);
        assert_eq!(tracker.clients().len(), 1);
        assert_eq!(tracker.clients()[0].last_visit, today());
    }

    #[test]
    fn test_blank_client_name_is_rejected() {
        let mut tracker = tracker_on(Arc::new(MemoryBackend::unbounded()));
        let result = tracker.add_client(client("   "), today());
        assert!(matches!(result, Err(ConsoleError::Validation(_))));
        assert!(tracker.clients().is_empty());
    }

    #[test]
    fn test_booking_produces_confirmation_alert() {
        let mut tracker = tracker_on(Arc::new(MemoryBackend::unbounded()));
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let receipt = tracker
            .book_appointment(appointment("Bruna", date), today())
            .unwrap();

        let alert = receipt.alert.unwrap();
        assert_eq!(alert.kind, AlertKind::Appointment);
        assert_eq!(
            alert.message,
            "Agendamento confirmado para Bruna em 2025-03-20"
        );
        assert_eq!(alert.date, today());
        assert!(!alert.read);
        assert_eq!(tracker.alerts().len(), 1);
    }

    #[test]
    fn test_tenth_appointment_unlocks_organizador_once() {
        let mut tracker = tracker_on(Arc::new(MemoryBackend::unbounded()));
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();

        for i in 0..9 {
            let receipt = tracker
                .book_appointment(appointment(&format!("c{i}"), date), today())
                .unwrap();
            assert!(receipt.unlocked.is_empty());
        }
        let receipt = tracker
            .book_appointment(appointment("c9", date), today())
            .unwrap();
        assert_eq!(receipt.unlocked, vec!["Organizador".to_owned()]);

        let receipt = tracker
            .book_appointment(appointment("c10", date), today())
            .unwrap();
        assert!(receipt.unlocked.is_empty());
    }

    #[test]
    fn test_stock_alert_fires_at_minimum() {
        let mut tracker = tracker_on(Arc::new(MemoryBackend::unbounded()));

        let receipt = tracker
            .add_stock_item(stock_item("Agulhas", 10, 5), today())
            .unwrap();
        assert!(receipt.alert.is_none());

        let receipt = tracker
            .add_stock_item(stock_item("Seringas", 5, 5), today())
            .unwrap();
        let alert = receipt.alert.unwrap();
        assert_eq!(alert.kind, AlertKind::Stock);
        assert_eq!(alert.message, "Estoque baixo: Seringas");
    }

    #[test]
    fn test_mark_alert_read_flips_only_read() {
        let mut tracker = tracker_on(Arc::new(MemoryBackend::unbounded()));
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let receipt = tracker
            .book_appointment(appointment("Bruna", date), today())
            .unwrap();
        let alert = receipt.alert.unwrap();

        tracker.mark_alert_read(&alert.id).unwrap();
        let stored = &tracker.alerts()[0];
        assert!(stored.read);
        assert_eq!(stored.message, alert.message);
    }

    #[test]
    fn test_dashboard_aggregates() {
        let mut tracker = tracker_on(Arc::new(MemoryBackend::unbounded()));
        tracker
            .record_transaction(transaction(TransactionKind::Income, "350.00"), today())
            .unwrap();
        tracker
            .record_transaction(transaction(TransactionKind::Income, "150.00"), today())
            .unwrap();
        tracker
            .record_transaction(transaction(TransactionKind::Expense, "120.50"), today())
            .unwrap();
        tracker
            .book_appointment(appointment("Bruna", today()), today())
            .unwrap();
        tracker
            .add_stock_item(stock_item("Seringas", 2, 5), today())
            .unwrap();

        let summary = tracker.dashboard(today());
        assert_eq!(summary.revenue, "500.00".parse().unwrap());
        assert_eq!(summary.expenses, "120.50".parse().unwrap());
        assert_eq!(summary.profit, "379.50".parse().unwrap());
        assert_eq!(summary.todays_appointments, 1);
        assert_eq!(summary.low_stock_items, 1);
        // Appointment confirmation plus low-stock alert.
        assert_eq!(summary.unread_alerts, 2);
    }

    #[test]
    fn test_collections_survive_reload() {
        let backend = Arc::new(MemoryBackend::unbounded());
        let mut tracker = tracker_on(Arc::clone(&backend));
        tracker.add_client(client("Ana"), today()).unwrap();
        tracker
            .book_appointment(appointment("Ana", today()), today())
            .unwrap();

        let reloaded = tracker_on(backend);
        assert_eq!(reloaded.clients().len(), 1);
        assert_eq!(reloaded.appointments().len(), 1);
        assert_eq!(reloaded.alerts().len(), 1);
        assert!(reloaded.badges().iter().any(|badge| badge.unlocked));
    }
}
