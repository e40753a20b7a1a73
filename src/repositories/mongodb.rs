use crate::{Order, ports::DatabaseService};
use tracing::info;

const MONGODB_ORDER_PRICE: f64 = 27.50;

/// Simulated document store.
#[derive(Debug, Clone, Default)]
pub struct MongoDatabase;

impl MongoDatabase {
    pub fn new() -> Self {
        Self
    }
}

impl DatabaseService for MongoDatabase {
    fn save(&self, order: &Order) {
        info!("MongoDB: saving to MongoDB database: {}", order);
    }

    fn find_by_id(&self, id: u64) -> Order {
        Order::new(id, format!("MongoDB Order #{}", id), MONGODB_ORDER_PRICE)
    }

    fn type_name(&self) -> &str {
        "MongoDB"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id_fabricates_mongodb_order() {
        let order = MongoDatabase::new().find_by_id(4);

        assert_eq!(order.id(), 4);
        assert_eq!(order.description(), "MongoDB Order #4");
        assert_eq!(order.total_amount(), 27.50);
    }
}
