use serde::{Deserialize, Serialize};
use std::fmt;

/// Order entity placed at the restaurant.
///
/// Plain data holder. Everything except the payment details is fixed at
/// construction; the payment details are filled in once the customer
/// picks a method.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Order {
    id: u64,
    description: String,
    total_amount: f64,
    payment_type: Option<String>,
    payment_info: Option<String>,
}

impl Order {
    pub fn new<S: Into<String>>(id: u64, description: S, total_amount: f64) -> Self {
        Self {
            id,
            description: description.into(),
            total_amount,
            payment_type: None,
            payment_info: None,
        }
    }

    /// Returns order ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns order description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the amount to be charged.
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Returns the payment method key, if one was chosen.
    pub fn payment_type(&self) -> Option<&str> {
        self.payment_type.as_deref()
    }

    /// Returns the payment details, empty until set.
    pub fn payment_info(&self) -> &str {
        self.payment_info.as_deref().unwrap_or("")
    }

    /// Sets payment method and details, replacing earlier ones.
    pub fn set_payment_info<T: Into<String>, I: Into<String>>(&mut self, payment_type: T, info: I) {
        self.payment_type = Some(payment_type.into());
        self.payment_info = Some(info.into());
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order{{id={}, description='{}', amount=${:.2}}}",
            self.id, self.description, self.total_amount
        )
    }
}
