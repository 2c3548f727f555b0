use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use pf_core::contact::{ContactMessage, ContactReceipt};
use pf_core::ports::{ContactTransportError, ContactTransportPort};
use tracing::debug;

/// Posts contact messages as JSON to a configured endpoint.
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ContactTransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ContactTransportError::Network(format!("build HTTP client failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_reqwest_error(error: reqwest::Error) -> ContactTransportError {
    if error.is_timeout() {
        ContactTransportError::Timeout
    } else if let Some(status) = error.status() {
        ContactTransportError::Rejected(status.as_u16())
    } else {
        ContactTransportError::Network(error.to_string())
    }
}

#[async_trait]
impl ContactTransportPort for HttpContactTransport {
    async fn send(&self, message: &ContactMessage) -> Result<ContactReceipt, ContactTransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), message_id = %message.id, "Contact endpoint answered");
        if !status.is_success() {
            return Err(ContactTransportError::Rejected(status.as_u16()));
        }

        Ok(ContactReceipt {
            message_id: message.id,
            accepted_at: Utc::now(),
        })
    }
}
