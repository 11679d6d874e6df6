use async_trait::async_trait;

use super::DeliveryError;
use crate::model::EmailPayload;

/// An external service that delivers a contact message to its recipient.
///
/// Implementations hold their own credentials and transport settings; the
/// form only hands over the payload. A call suspends until the service
/// answers, fails, or times out, and is never retried by the caller.
#[async_trait]
pub trait DeliveryGateway: Send + Sync {
    /// Delivers `payload`, resolving to `Ok(())` on success.
    async fn send(&self, payload: &EmailPayload) -> Result<(), DeliveryError>;
}

