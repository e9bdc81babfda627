use std::time::Duration;

use tracing::debug;

use crate::error::DictError;

/// Download the FreeDict source archive into memory.
///
/// One GET, whole body buffered. There is no resume or partial-content
/// handling; a transport failure or non-success status is fatal.
pub async fn download_archive(
    client: &reqwest::Client,
    url: &str,
    user_agent: &str,
    timeout: Duration,
) -> Result<Vec<u8>, DictError> {
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, user_agent)
        .timeout(timeout)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(DictError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response.bytes().await?;
    debug!("downloaded {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}
