use crate::RestaurantError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DATABASE_ENV: &str = "DATABASE_TYPE";
pub const NOTIFICATION_ENV: &str = "NOTIF_TYPE";
pub const PAYMENT_ENV: &str = "PAYMENT_TYPE";

/// Which backends the restaurant should be wired with.
///
/// Values are factory keys and stay unparsed here, so an unknown key is
/// reported by the factory together with the key itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RestaurantConfig {
    pub database: String,
    pub notification: String,
    pub payment: Option<String>,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            database: "mysql".to_string(),
            notification: "email".to_string(),
            payment: None,
        }
    }
}

impl RestaurantConfig {
    pub fn new<S: Into<String>>(database: S, notification: S) -> Self {
        Self {
            database: database.into(),
            notification: notification.into(),
            payment: None,
        }
    }

    pub fn with_payment<S: Into<String>>(mut self, payment: S) -> Self {
        self.payment = Some(payment.into());
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RestaurantError> {
        toml::from_str(content)
            .map_err(|e| RestaurantError::config(format!("Invalid configuration: {}", e)))
    }

    /// Reads a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, RestaurantError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, RestaurantError> {
        toml::to_string(self)
            .map_err(|e| RestaurantError::config(format!("Cannot serialize configuration: {}", e)))
    }

    /// Overrides keys from `DATABASE_TYPE`, `NOTIF_TYPE` and `PAYMENT_TYPE`.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Overrides keys with whatever `lookup` returns for the environment
    /// variable names. Empty values are ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(database) = lookup(DATABASE_ENV) {
            self.database = database;
        }
        if let Some(notification) = lookup(NOTIFICATION_ENV) {
            self.notification = notification;
        }
        if let Some(payment) = lookup(PAYMENT_ENV) {
            self.payment = Some(payment);
        }
        self
    }
}
