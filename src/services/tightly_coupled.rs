//! The "before" picture: a service welded to its concrete collaborators.
//!
//! Kept as a comparison fixture for the demo and tests. Nothing here
//! implements a port, and the service offers no way to swap what it uses.

use crate::Order;
use tracing::{info, warn};

pub struct LegacyMySqlDatabase;

impl LegacyMySqlDatabase {
    pub fn save(&self, order: &Order) {
        info!("MySQL: saving to MySQL database: {}", order);
    }

    pub fn find_by_id(&self, id: u64) -> Order {
        Order::new(id, format!("MySQL Order #{}", id), 25.99)
    }
}

pub struct LegacyEmailNotifier;

impl LegacyEmailNotifier {
    pub fn send(&self, message: &str) {
        info!("Email: sending email - {}", message);
    }
}

/// Restaurant service that builds and owns its own MySQL and e-mail handles.
pub struct TightlyCoupledRestaurantService {
    database: Box<LegacyMySqlDatabase>,
    notification: Box<LegacyEmailNotifier>,
}

impl TightlyCoupledRestaurantService {
    pub fn new() -> Self {
        info!("TightlyCoupledRestaurantService: created with hard-wired MySQL + Email");
        Self {
            database: Box::new(LegacyMySqlDatabase),
            notification: Box::new(LegacyEmailNotifier),
        }
    }

    pub fn process_order(&self, order: &Order) {
        self.database.save(order);
        self.notification
            .send(&format!("Order {} processed!", order.id()));
        warn!("Order {} processed with tight coupling", order.id());
    }

    pub fn get_order(&self, id: u64) -> Order {
        self.database.find_by_id(id)
    }
}

impl Default for TightlyCoupledRestaurantService {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TightlyCoupledRestaurantService {
    fn drop(&mut self) {
        info!("TightlyCoupledRestaurantService: releasing MySQL + Email");
    }
}
