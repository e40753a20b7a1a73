use crate::{
    Order,
    ports::{DatabaseService, NotificationService},
};
use std::sync::Arc;
use tracing::info;

/// Order processing that depends only on the storage and notification ports.
///
/// Both dependencies are handed in by the caller. The service never builds
/// or inspects a concrete backend; swapping MySQL for MongoDB, or e-mail for
/// Slack, is a matter of passing different handles to [`RestaurantService::new`].
pub struct RestaurantService {
    database: Arc<dyn DatabaseService>,
    notification: Arc<dyn NotificationService>,
}

impl RestaurantService {
    pub fn new(
        database: Arc<dyn DatabaseService>,
        notification: Arc<dyn NotificationService>,
    ) -> Self {
        info!(
            "RestaurantService: created with {} + {}",
            database.type_name(),
            notification.type_name()
        );

        Self {
            database,
            notification,
        }
    }

    /// Saves the order, then confirms it through the notification channel.
    pub fn process_order(&self, order: &Order) {
        self.database.save(order);
        self.notification
            .send(&format!("Order {} processed successfully!", order.id()));
        info!("Order {} processed with loose coupling", order.id());
    }

    pub fn get_order(&self, id: u64) -> Order {
        self.database.find_by_id(id)
    }

    /// `"<database> + <notification>"`, for diagnostics.
    pub fn configuration(&self) -> String {
        format!(
            "{} + {}",
            self.database.type_name(),
            self.notification.type_name()
        )
    }
}
