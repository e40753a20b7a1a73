/// Interchangeable way of charging for an order.
pub trait PaymentStrategy: Send + Sync {
    /// Checks the payment details before any money moves.
    fn validate_payment(&self, payment_info: &str) -> bool;

    fn process_payment(&self, amount: f64);

    fn payment_type(&self) -> &str;
}
