use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ExternalServiceError;

/// One GET and one status check. No retries, no timeout beyond the client's.
pub(crate) async fn get_body(
    http: &reqwest::Client,
    provider: &'static str,
    url: &str,
    query: &[(&str, &str)],
) -> Result<String, ExternalServiceError> {
    // The URL carries the credential in its query string; keep it out of errors.
    let transport = |source: reqwest::Error| ExternalServiceError::Transport {
        provider,
        source: source.without_url(),
    };

    let response = http.get(url).query(query).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExternalServiceError::Status { provider, status });
    }

    let body = response.text().await.map_err(transport)?;
    debug!("{} provider answered {} bytes", provider, body.len());
    Ok(body)
}

pub(crate) fn decode<T: DeserializeOwned>(
    provider: &'static str,
    body: &str,
) -> Result<T, ExternalServiceError> {
    serde_json::from_str(body).map_err(|e| ExternalServiceError::payload(provider, e))
}
