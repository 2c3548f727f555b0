use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactTransportError {
    #[error("contact endpoint timed out")]
    Timeout,

    #[error("contact endpoint rejected the message with status {0}")]
    Rejected(u16),

    #[error("network error: {0}")]
    Network(String),
}
