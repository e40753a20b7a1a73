use crate::{Order, ports::DatabaseService};
use tracing::info;

const POSTGRESQL_ORDER_PRICE: f64 = 29.99;

#[derive(Debug, Clone, Default)]
pub struct PostgreSqlDatabase;

impl PostgreSqlDatabase {
    pub fn new() -> Self {
        Self
    }
}

impl DatabaseService for PostgreSqlDatabase {
    fn save(&self, order: &Order) {
        info!("PostgreSQL: saving to PostgreSQL database: {}", order);
    }

    fn find_by_id(&self, id: u64) -> Order {
        Order::new(id, format!("PostgreSQL Order #{}", id), POSTGRESQL_ORDER_PRICE)
    }

    fn type_name(&self) -> &str {
        "PostgreSQL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id_fabricates_postgresql_order() {
        let order = PostgreSqlDatabase::new().find_by_id(3);

        assert_eq!(order.id(), 3);
        assert_eq!(order.description(), "PostgreSQL Order #3");
        assert_eq!(order.total_amount(), 29.99);
    }
}
