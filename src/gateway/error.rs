/// Why a delivery attempt failed.
///
/// Never attributed to a form field. The form treats every variant the same
/// way; the variants only refine the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The service did not answer within the configured timeout.
    #[error("the delivery service did not respond in time")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("the delivery service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The delivery task ended without producing an outcome.
    #[error("delivery aborted: {0}")]
    Aborted(String),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for DeliveryError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Aborted(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_includes_status_and_body() {
        let err = DeliveryError::Rejected {
            status: 400,
            body: "The template ID is invalid".into(),
        };
        assert_eq!(
            err.to_string(),
            "the delivery service rejected the message (400): The template ID is invalid"
        );
    }

    #[test]
    fn network_message_includes_reason() {
        let err = DeliveryError::Network("network_error".into());
        assert_eq!(err.to_string(), "network error: network_error");
    }

    #[tokio::test]
    async fn cancelled_task_becomes_aborted() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let err = DeliveryError::from(handle.await.unwrap_err());
        assert!(matches!(err, DeliveryError::Aborted(_)));
    }
}
