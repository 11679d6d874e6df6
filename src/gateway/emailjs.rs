use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::{DeliveryError, DeliveryGateway};
use crate::config::GatewayConfig;
use crate::model::EmailPayload;

/// Request body of the EmailJS `email/send` REST call.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

/// Delivers messages through the EmailJS REST API.
pub struct EmailJsGateway {
    client: Client,
    config: GatewayConfig,
}

impl EmailJsGateway {
    /// Builds a gateway with an HTTP client bounded by the config's timeout.
    pub fn new(config: GatewayConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    fn request<'a>(&'a self, payload: &'a EmailPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: self.config.service_id(),
            template_id: self.config.template_id(),
            user_id: self.config.public_key(),
            template_params: payload,
        }
    }
}

#[async_trait]
impl DeliveryGateway for EmailJsGateway {
    async fn send(&self, payload: &EmailPayload) -> Result<(), DeliveryError> {
        tracing::debug!(
            endpoint = %self.config.endpoint(),
            template = %self.config.template_id(),
            "sending contact message"
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .json(&self.request(payload))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::error!(status = %status, body = %body, "delivery service rejected message");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
