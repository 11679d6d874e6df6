//! Delivery of contact messages to the external email service.

mod emailjs;
mod error;
mod sender;

pub use emailjs::EmailJsGateway;
pub use error::DeliveryError;
pub use sender::DeliveryGateway;
