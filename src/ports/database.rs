use crate::Order;

/// Storage backend the restaurant keeps its orders in.
pub trait DatabaseService: Send + Sync {
    fn save(&self, order: &Order);

    fn find_by_id(&self, id: u64) -> Order;

    /// Backend label, used for logging and diagnostics only.
    fn type_name(&self) -> &str;
}
