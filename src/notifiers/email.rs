use crate::ports::NotificationService;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct EmailNotification;

impl EmailNotification {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for EmailNotification {
    fn send(&self, message: &str) {
        info!("Email: {}", message);
    }

    fn type_name(&self) -> &str {
        "Email"
    }
}
