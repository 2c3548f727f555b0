use async_trait::async_trait;

use crate::contact::{ContactMessage, ContactReceipt};
use crate::ports::errors::ContactTransportError;

/// Delivers validated contact messages.
///
/// 投递已校验的联系消息。
#[async_trait]
pub trait ContactTransportPort: Send + Sync {
    /// Send one message.
    ///
    /// Error semantics:
    /// - Timeout  : no answer within the configured timeout
    /// - Rejected : endpoint answered with a non-success status
    /// - Network  : connection or protocol failure
    async fn send(&self, message: &ContactMessage) -> Result<ContactReceipt, ContactTransportError>;
}
