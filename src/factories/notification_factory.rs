// src/factories/notification_factory.rs

use crate::{
    RestaurantError,
    notifiers::{EmailNotification, SlackNotification, SmsNotification},
    ports::NotificationService,
};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Email,
    Sms,
    Slack,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [Self::Email, Self::Sms, Self::Slack];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Slack => "slack",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for NotificationKind {
    type Error = RestaurantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "slack" => Ok(Self::Slack),
            _ => Err(RestaurantError::UnknownNotification(value.to_string())),
        }
    }
}

impl FromStr for NotificationKind {
    type Err = RestaurantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Factory for notification channels keyed by configuration strings.
#[derive(Debug, Clone)]
pub struct NotificationFactory;

impl NotificationFactory {
    pub fn create(key: &str) -> Result<Arc<dyn NotificationService>, RestaurantError> {
        let kind = NotificationKind::try_from(key)?;
        Ok(Self::create_kind(kind))
    }

    pub fn create_kind(kind: NotificationKind) -> Arc<dyn NotificationService> {
        debug!("Creating {} notification channel", kind);
        match kind {
            NotificationKind::Email => Arc::new(EmailNotification::new()),
            NotificationKind::Sms => Arc::new(SmsNotification::new()),
            NotificationKind::Slack => Arc::new(SlackNotification::new()),
        }
    }
}
