// src/factories/payment_factory.rs

use crate::{
    RestaurantError,
    payments::{CashStrategy, CreditCardStrategy, DigitalWalletStrategy},
    ports::PaymentStrategy,
};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Payment methods an order can name in its payment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CreditCard,
    DigitalWallet,
    Cash,
}

impl PaymentMethod {
    pub fn key(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::DigitalWallet => "wallet",
            Self::Cash => "cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = RestaurantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "credit_card" | "card" => Ok(Self::CreditCard),
            "wallet" | "digital_wallet" => Ok(Self::DigitalWallet),
            "cash" => Ok(Self::Cash),
            _ => Err(RestaurantError::UnknownPaymentMethod(value.to_string())),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = RestaurantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Factory for payment strategies, keyed like `Order::payment_type`.
#[derive(Debug, Clone)]
pub struct PaymentStrategyFactory;

impl PaymentStrategyFactory {
    pub fn create(key: &str) -> Result<Arc<dyn PaymentStrategy>, RestaurantError> {
        let method = PaymentMethod::try_from(key)?;
        Ok(Self::create_method(method))
    }

    pub fn create_method(method: PaymentMethod) -> Arc<dyn PaymentStrategy> {
        debug!("Creating {} payment strategy", method);
        match method {
            PaymentMethod::CreditCard => Arc::new(CreditCardStrategy::new()),
            PaymentMethod::DigitalWallet => Arc::new(DigitalWalletStrategy::new()),
            PaymentMethod::Cash => Arc::new(CashStrategy::new()),
        }
    }
}
