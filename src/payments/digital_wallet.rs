use crate::ports::PaymentStrategy;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct DigitalWalletStrategy;

impl DigitalWalletStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for DigitalWalletStrategy {
    fn validate_payment(&self, payment_info: &str) -> bool {
        !payment_info.is_empty()
    }

    fn process_payment(&self, amount: f64) {
        info!("Processing digital wallet payment: ${:.2}", amount);
    }

    fn payment_type(&self) -> &str {
        "Digital Wallet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_wallet_id() {
        let strategy = DigitalWalletStrategy::new();
        assert!(strategy.validate_payment("wallet123"));
        assert!(strategy.validate_payment("x"));
        assert!(!strategy.validate_payment(""));
    }
}
