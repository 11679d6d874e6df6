use crate::gateway::DeliveryError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The delivery gateway could not be set up.
    #[error("delivery setup failed: {0}")]
    Gateway(#[from] DeliveryError),
}
