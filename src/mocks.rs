//! Call-recording test doubles for the restaurant ports
//!
//! Each mock writes into a [`CallLog`]. Handing several mocks the same log
//! lets a test assert the order in which a service touched its dependencies.
//!
//! # Example
//!
//! ```
//! use restaurant_core::mocks::{Call, CallLog, MockDatabase, MockNotification};
//! use restaurant_core::services::RestaurantService;
//! use restaurant_core::Order;
//! use std::sync::Arc;
//!
//! let log = CallLog::new();
//! let service = RestaurantService::new(
//!     Arc::new(MockDatabase::with_log(log.clone())),
//!     Arc::new(MockNotification::with_log(log.clone())),
//! );
//!
//! service.process_order(&Order::new(999, "Test Order", 99.99));
//!
//! assert_eq!(
//!     log.calls(),
//!     vec![
//!         Call::Save(999),
//!         Call::Send("Order 999 processed successfully!".to_string()),
//!     ]
//! );
//! ```

use crate::{
    Order,
    ports::{DatabaseService, NotificationService, PaymentStrategy},
};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

/// A single interaction with a mocked port.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Save(u64),
    Send(String),
    Validate(String),
    Process(f64),
}

/// Shared, ordered record of calls made against mocks.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        self.lock().push(call);
    }

    /// Snapshot of every call so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panicking test must not poison the log for later assertions.
    fn lock(&self) -> MutexGuard<'_, Vec<Call>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Mock database that remembers every saved order.
#[derive(Debug, Clone, Default)]
pub struct MockDatabase {
    log: CallLog,
    saved: Arc<Mutex<Vec<Order>>>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: CallLog) -> Self {
        Self {
            log,
            saved: Arc::default(),
        }
    }

    /// Orders passed to `save`, in call order.
    pub fn saved_orders(&self) -> Vec<Order> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl DatabaseService for MockDatabase {
    fn save(&self, order: &Order) {
        info!("MOCK DATABASE: save called for order {}", order.id());
        self.log.record(Call::Save(order.id()));
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(order.clone());
    }

    fn find_by_id(&self, id: u64) -> Order {
        Order::new(id, "Mock Order", 0.0)
    }

    fn type_name(&self) -> &str {
        "Mock Database"
    }
}

/// Mock notifier that remembers every message.
#[derive(Debug, Clone, Default)]
pub struct MockNotification {
    log: CallLog,
    sent: Arc<Mutex<Vec<String>>>,
}

impl MockNotification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: CallLog) -> Self {
        Self {
            log,
            sent: Arc::default(),
        }
    }

    pub fn sent_messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl NotificationService for MockNotification {
    fn send(&self, message: &str) {
        info!("MOCK NOTIFICATION: {}", message);
        self.log.record(Call::Send(message.to_string()));
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }

    fn type_name(&self) -> &str {
        "Mock Notification"
    }
}

/// Mock payment strategy with a fixed validation verdict.
#[derive(Debug, Clone)]
pub struct MockPaymentStrategy {
    log: CallLog,
    accepts: bool,
    processed: Arc<Mutex<Vec<f64>>>,
}

impl MockPaymentStrategy {
    /// Strategy whose `validate_payment` always answers `accepts`.
    pub fn new(accepts: bool) -> Self {
        Self::with_log(accepts, CallLog::new())
    }

    pub fn with_log(accepts: bool, log: CallLog) -> Self {
        Self {
            log,
            accepts,
            processed: Arc::default(),
        }
    }

    /// Amounts passed to `process_payment`.
    pub fn processed_amounts(&self) -> Vec<f64> {
        self.processed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl PaymentStrategy for MockPaymentStrategy {
    fn validate_payment(&self, payment_info: &str) -> bool {
        self.log.record(Call::Validate(payment_info.to_string()));
        self.accepts
    }

    fn process_payment(&self, amount: f64) {
        self.log.record(Call::Process(amount));
        self.processed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(amount);
    }

    fn payment_type(&self) -> &str {
        "Mock Payment"
    }
}
