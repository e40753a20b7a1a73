pub mod application;
pub mod entities;
pub mod errors;
pub mod factories;
pub mod mocks;
pub mod models;
pub mod notifiers;
pub mod payments;
pub mod ports;
pub mod repositories;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use models::*;
pub use ports::*;
