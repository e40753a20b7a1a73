use crate::ports::PaymentStrategy;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct CashStrategy;

impl CashStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for CashStrategy {
    // Cash needs no details.
    fn validate_payment(&self, _payment_info: &str) -> bool {
        true
    }

    fn process_payment(&self, amount: f64) {
        info!("Processing cash payment: ${:.2}", amount);
    }

    fn payment_type(&self) -> &str {
        "Cash"
    }
}
