use crate::{
    Order, RestaurantConfig, RestaurantError,
    factories::{DatabaseFactory, NotificationFactory},
    services::RestaurantService,
};
use tracing::{info, warn};

pub const NOT_INITIALIZED: &str = "Not initialized";

/// Wires a [`RestaurantService`] from configuration keys.
///
/// The manager only knows the factory keys; the factories pick the concrete
/// backends. It is safe to use before [`RestaurantManager::initialize`]:
/// operations then report [`RestaurantError::NotInitialized`].
#[derive(Default)]
pub struct RestaurantManager {
    service: Option<RestaurantService>,
}

impl RestaurantManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh service for the given keys, replacing the current one.
    ///
    /// On an unknown key the error is returned and the current service,
    /// if any, stays in place.
    pub fn initialize(
        &mut self,
        database_key: &str,
        notification_key: &str,
    ) -> Result<(), RestaurantError> {
        info!(
            "Initializing restaurant with {} and {}",
            database_key, notification_key
        );

        let database = DatabaseFactory::create(database_key)?;
        let notification = NotificationFactory::create(notification_key)?;

        self.service = Some(RestaurantService::new(database, notification));
        Ok(())
    }

    pub fn initialize_from_config(
        &mut self,
        config: &RestaurantConfig,
    ) -> Result<(), RestaurantError> {
        self.initialize(&config.database, &config.notification)
    }

    pub fn is_initialized(&self) -> bool {
        self.service.is_some()
    }

    pub fn process_order(&self, order: &Order) -> Result<(), RestaurantError> {
        let service = self.service()?;
        service.process_order(order);
        Ok(())
    }

    pub fn get_order(&self, id: u64) -> Result<Order, RestaurantError> {
        Ok(self.service()?.get_order(id))
    }

    /// The service's configuration label, or `"Not initialized"`.
    pub fn configuration(&self) -> String {
        self.service
            .as_ref()
            .map(RestaurantService::configuration)
            .unwrap_or_else(|| NOT_INITIALIZED.to_string())
    }

    fn service(&self) -> Result<&RestaurantService, RestaurantError> {
        self.service.as_ref().ok_or_else(|| {
            warn!("Restaurant not initialized!");
            RestaurantError::NotInitialized
        })
    }
}
