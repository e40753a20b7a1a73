use crate::ports::NotificationService;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct SmsNotification;

impl SmsNotification {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for SmsNotification {
    fn send(&self, message: &str) {
        info!("SMS: {}", message);
    }

    fn type_name(&self) -> &str {
        "SMS"
    }
}
