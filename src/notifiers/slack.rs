use crate::ports::NotificationService;
use tracing::info;

/// Posts order updates to the kitchen's Slack channel (simulated).
#[derive(Debug, Clone, Default)]
pub struct SlackNotification;

impl SlackNotification {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for SlackNotification {
    fn send(&self, message: &str) {
        info!("Slack: {}", message);
    }

    fn type_name(&self) -> &str {
        "Slack"
    }
}
