use anyhow::{Context, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub fn build_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint)
}

/// The access key travels as a query parameter, so every reqwest error is
/// stripped of its URL before it can end up in a message or a log line.
pub async fn make_request<T>(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    access_key: &str,
) -> Result<T>
where
    T: DeserializeOwned,
{
    let url = build_url(base_url, endpoint);
    let res = client
        .get(&url)
        .query(&[("access_key", access_key)])
        .send()
        .await
        .map_err(|err| err.without_url())
        .with_context(|| format!("Request to '{}' failed", endpoint))?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res
        .text()
        .await
        .map_err(|err| err.without_url())
        .with_context(|| format!("Failed to read response from '{}'", endpoint))?;
    parse_response(&text).with_context(|| format!("Unexpected response from '{}'", endpoint))
}

pub fn parse_response<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(Error::from)
}
