pub mod cash;
pub mod credit_card;
pub mod digital_wallet;

pub use cash::CashStrategy;
pub use credit_card::CreditCardStrategy;
pub use digital_wallet::DigitalWalletStrategy;
