pub mod restaurant_service;
pub mod tightly_coupled;

pub use restaurant_service::RestaurantService;
pub use tightly_coupled::TightlyCoupledRestaurantService;
