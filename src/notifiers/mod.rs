pub mod email;
pub mod slack;
pub mod sms;

pub use email::EmailNotification;
pub use slack::SlackNotification;
pub use sms::SmsNotification;
