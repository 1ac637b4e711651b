use thiserror::Error;

/// Failure talking to a weather or news provider.
#[derive(Debug, Error)]
pub enum ExternalServiceError {
    #[error("{provider} provider returned HTTP {status}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{provider} provider sent a malformed payload: {reason}")]
    Payload {
        provider: &'static str,
        reason: String,
    },

    #[error("{provider} provider request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ExternalServiceError {
    pub(crate) fn payload(provider: &'static str, reason: impl ToString) -> Self {
        Self::Payload {
            provider,
            reason: reason.to_string(),
        }
    }
}
