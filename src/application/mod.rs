pub mod payment_processor;
pub mod restaurant_manager;

pub use payment_processor::PaymentProcessor;
pub use restaurant_manager::{NOT_INITIALIZED, RestaurantManager};
