use crate::{
    Order, RestaurantError, factories::PaymentStrategyFactory, ports::PaymentStrategy,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Charges orders through whichever payment strategy is currently selected.
pub struct PaymentProcessor {
    strategy: Arc<dyn PaymentStrategy>,
}

impl PaymentProcessor {
    pub fn new(strategy: Arc<dyn PaymentStrategy>) -> Self {
        info!("PaymentProcessor initialized with: {}", strategy.payment_type());
        Self { strategy }
    }

    /// Builds a processor for a payment method key such as `"cash"`.
    pub fn from_key(key: &str) -> Result<Self, RestaurantError> {
        Ok(Self::new(PaymentStrategyFactory::create(key)?))
    }

    pub fn set_strategy(&mut self, strategy: Arc<dyn PaymentStrategy>) {
        self.strategy = strategy;
        info!("Payment strategy changed to: {}", self.strategy.payment_type());
    }

    /// Switches to the strategy named by the order's payment type.
    ///
    /// Leaves the current strategy in place when the order has no payment
    /// type or names an unknown one; the latter is returned as an error.
    pub fn select_for_order(&mut self, order: &Order) -> Result<(), RestaurantError> {
        if let Some(key) = order.payment_type() {
            let strategy = PaymentStrategyFactory::create(key)?;
            self.set_strategy(strategy);
        }
        Ok(())
    }

    /// Validates the order's payment details and, only if they pass,
    /// charges the order's total. Returns whether the payment went through.
    pub fn process_order_payment(&self, order: &Order) -> bool {
        info!("Processing payment for order: {}", order.id());

        if !self.strategy.validate_payment(order.payment_info()) {
            warn!(
                "Payment validation failed for order {} ({})",
                order.id(),
                self.strategy.payment_type()
            );
            return false;
        }

        self.strategy.process_payment(order.total_amount());
        info!("Payment successful for order {}", order.id());
        true
    }

    pub fn current_strategy(&self) -> String {
        self.strategy.payment_type().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{Call, MockPaymentStrategy};
    use crate::payments::{CashStrategy, CreditCardStrategy, DigitalWalletStrategy};

    fn order_with_info(info: &str) -> Order {
        let mut order = Order::new(6, "Ayam Bakar Taliwang", 45.0);
        order.set_payment_info("credit_card", info);
        order
    }

    #[test]
    fn test_rejected_payment_is_not_processed() {
        let strategy = MockPaymentStrategy::new(false);
        let processor = PaymentProcessor::new(Arc::new(strategy.clone()));

        assert!(!processor.process_order_payment(&order_with_info("bad")));
        assert!(strategy.processed_amounts().is_empty());
        assert_eq!(strategy.log().calls(), vec![Call::Validate("bad".to_string())]);
    }

    #[test]
    fn test_accepted_payment_is_processed_once_with_total() {
        let strategy = MockPaymentStrategy::new(true);
        let processor = PaymentProcessor::new(Arc::new(strategy.clone()));

        assert!(processor.process_order_payment(&order_with_info("ok")));
        assert_eq!(strategy.processed_amounts(), vec![45.0]);
        assert_eq!(
            strategy.log().calls(),
            vec![Call::Validate("ok".to_string()), Call::Process(45.0)]
        );
    }

    #[test]
    fn test_runtime_strategy_switching() {
        let mut order = Order::new(6, "Ayam Bakar Taliwang", 45.0);
        let mut processor = PaymentProcessor::new(Arc::new(CreditCardStrategy::new()));

        order.set_payment_info("credit_card", "1234567890123456");
        assert!(processor.process_order_payment(&order));

        processor.set_strategy(Arc::new(DigitalWalletStrategy::new()));
        assert_eq!(processor.current_strategy(), "Digital Wallet");
        order.set_payment_info("wallet", "wallet123");
        assert!(processor.process_order_payment(&order));

        order.set_payment_info("wallet", "");
        assert!(!processor.process_order_payment(&order));

        processor.set_strategy(Arc::new(CashStrategy::new()));
        order.set_payment_info("cash", "");
        assert!(processor.process_order_payment(&order));
        assert_eq!(processor.current_strategy(), "Cash");
    }

    #[test]
    fn test_credit_card_rejects_short_number() {
        let processor = PaymentProcessor::new(Arc::new(CreditCardStrategy::new()));
        assert!(!processor.process_order_payment(&order_with_info("1234")));
        assert!(!processor.process_order_payment(&Order::new(1, "Es Teh", 1.5)));
    }

    #[test]
    fn test_select_for_order() {
        let mut processor = PaymentProcessor::from_key("cash").unwrap();
        let mut order = Order::new(8, "Pempek Palembang", 15.0);

        processor.select_for_order(&order).unwrap();
        assert_eq!(processor.current_strategy(), "Cash");

        order.set_payment_info("wallet", "wallet123");
        processor.select_for_order(&order).unwrap();
        assert_eq!(processor.current_strategy(), "Digital Wallet");

        order.set_payment_info("iou", "");
        let err = processor.select_for_order(&order).unwrap_err();
        assert_eq!(err.key(), Some("iou"));
        assert_eq!(processor.current_strategy(), "Digital Wallet");
    }

    #[test]
    fn test_strategy_shared_with_caller() {
        let strategy = MockPaymentStrategy::new(true);
        let shared: Arc<dyn PaymentStrategy> = Arc::new(strategy.clone());
        let mut processor = PaymentProcessor::new(shared.clone());

        processor.set_strategy(Arc::new(CashStrategy::new()));
        processor.set_strategy(shared.clone());

        assert!(processor.process_order_payment(&order_with_info("x")));
        assert_eq!(strategy.processed_amounts(), vec![45.0]);
    }
}
