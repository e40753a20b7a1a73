use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("Unknown database type: {0}")]
    UnknownDatabase(String),

    #[error("Unknown notification type: {0}")]
    UnknownNotification(String),

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    #[error("Restaurant not initialized")]
    NotInitialized,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

impl RestaurantError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// True for errors caused by a configuration key nothing can be built from.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::UnknownDatabase(_) | Self::UnknownNotification(_) | Self::UnknownPaymentMethod(_)
        )
    }

    /// The offending key of an invalid-argument error.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::UnknownDatabase(key)
            | Self::UnknownNotification(key)
            | Self::UnknownPaymentMethod(key) => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_are_invalid_arguments() {
        let err = RestaurantError::UnknownDatabase("oracle".to_string());
        assert!(err.is_invalid_argument());
        assert_eq!(err.key(), Some("oracle"));
        assert_eq!(err.to_string(), "Unknown database type: oracle");

        let err = RestaurantError::UnknownNotification("pager".to_string());
        assert!(err.is_invalid_argument());
        assert_eq!(err.key(), Some("pager"));
    }

    #[test]
    fn test_not_initialized_is_not_invalid_argument() {
        let err = RestaurantError::NotInitialized;
        assert!(!err.is_invalid_argument());
        assert_eq!(err.key(), None);
    }
}
