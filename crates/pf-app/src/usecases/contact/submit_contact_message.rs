//! Use case for sending the contact form
//! 提交联系表单的用例

use std::sync::Arc;

use chrono::Utc;
use pf_core::contact::{ContactForm, ContactFormErrors, ContactMessage, ContactReceipt};
use pf_core::ports::{ContactTransportError, ContactTransportPort};
use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, Error)]
pub enum SubmitContactError {
    #[error("contact form is incomplete: {0}")]
    Invalid(ContactFormErrors),

    #[error(transparent)]
    Transport(#[from] ContactTransportError),
}

/// Validate the form and hand the message to the transport.
///
/// ## Behavior / 行为
/// - Invalid forms never reach the transport
/// - Completes as soon as the transport answers
pub struct SubmitContactMessage {
    transport: Arc<dyn ContactTransportPort>,
}

impl SubmitContactMessage {
    pub fn new(transport: Arc<dyn ContactTransportPort>) -> Self {
        Self { transport }
    }

    pub async fn execute(&self, form: &ContactForm) -> Result<ContactReceipt, SubmitContactError> {
        let span = info_span!("usecase.submit_contact_message.execute");

        async {
            let message =
                ContactMessage::from_form(form, Utc::now()).map_err(SubmitContactError::Invalid)?;

            info!(message_id = %message.id, "Sending contact message");
            let receipt = self.transport.send(&message).await.map_err(|err| {
                warn!(message_id = %message.id, error = %err, "Contact message not delivered");
                err
            })?;

            info!(message_id = %receipt.message_id, "Contact message delivered");
            Ok(receipt)
        }
        .instrument(span)
        .await
    }
}
