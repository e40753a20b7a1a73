// src/factories/mod.rs

mod database_factory;
mod notification_factory;
mod payment_factory;

pub use database_factory::{DatabaseFactory, DatabaseKind};
pub use notification_factory::{NotificationFactory, NotificationKind};
pub use payment_factory::{PaymentMethod, PaymentStrategyFactory};
