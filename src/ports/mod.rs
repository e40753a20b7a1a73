// src/ports/mod.rs

pub use database::DatabaseService;
pub use notification::NotificationService;
pub use payment::PaymentStrategy;

pub mod database;
pub mod notification;
pub mod payment;
