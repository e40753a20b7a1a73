use crate::{Order, ports::DatabaseService};
use tracing::info;

const MYSQL_ORDER_PRICE: f64 = 25.99;

/// Simulated MySQL backend. Writes are only logged.
#[derive(Debug, Clone, Default)]
pub struct MySqlDatabase;

impl MySqlDatabase {
    pub fn new() -> Self {
        Self
    }
}

impl DatabaseService for MySqlDatabase {
    fn save(&self, order: &Order) {
        info!("MySQL: saving to MySQL database: {}", order);
    }

    fn find_by_id(&self, id: u64) -> Order {
        Order::new(id, format!("MySQL Order #{}", id), MYSQL_ORDER_PRICE)
    }

    fn type_name(&self) -> &str {
        "MySQL"
    }
}
