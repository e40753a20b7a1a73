/// Channel used to tell customers and staff about orders.
pub trait NotificationService: Send + Sync {
    fn send(&self, message: &str);

    fn type_name(&self) -> &str;
}
