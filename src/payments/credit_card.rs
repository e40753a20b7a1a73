use crate::ports::PaymentStrategy;
use tracing::info;

const CARD_NUMBER_LEN: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct CreditCardStrategy;

impl CreditCardStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for CreditCardStrategy {
    /// Accepts exactly sixteen bytes, nothing more is checked.
    fn validate_payment(&self, payment_info: &str) -> bool {
        payment_info.len() == CARD_NUMBER_LEN
    }

    fn process_payment(&self, amount: f64) {
        info!("Processing credit card payment: ${:.2}", amount);
    }

    fn payment_type(&self) -> &str {
        "Credit Card"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_sixteen_characters() {
        let strategy = CreditCardStrategy::new();
        assert!(strategy.validate_payment("1234567890123456"));
        assert!(strategy.validate_payment("abcdefghijklmnop"));
    }

    #[test]
    fn test_rejects_other_lengths() {
        let strategy = CreditCardStrategy::new();
        assert!(!strategy.validate_payment(""));
        assert!(!strategy.validate_payment("123456789012345"));
        assert!(!strategy.validate_payment("12345678901234567"));
    }

    #[test]
    fn test_length_is_measured_in_bytes() {
        let strategy = CreditCardStrategy::new();
        // 16 chars but 32 bytes
        assert!(!strategy.validate_payment("éééééééééééééééé"));
        // 8 chars, 16 bytes
        assert!(strategy.validate_payment("éééééééé"));
    }
}
