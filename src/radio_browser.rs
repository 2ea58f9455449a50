use crate::config::PresetConfig;
use crate::models::{SearchQuery, StationRecord};
use anyhow::{anyhow, Context, Result};
use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, info};
use url::Url;

const MAX_BODY_BYTES: usize = 1_000_000;

#[derive(Debug, Clone)]
pub struct RadioBrowserClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RadioBrowserClient {
    pub fn new(config: &PresetConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid User-Agent header")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// POST the station search and decode the array of matches.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<StationRecord>> {
        let body = serde_json::to_vec(query).context("Failed to encode search query")?;
        info!(url = %self.endpoint, "fetching stations");
        let resp = self
            .http
            .post(self.endpoint.clone())
            .body(body)
            .send()
            .await
            .context("Station search request failed")?;
        let status = resp.status();
        debug!(%status, "search response");
        if status != StatusCode::OK {
            return Err(anyhow!("HTTP error: {}", status.as_u16()));
        }
        let bytes = read_limited(resp, MAX_BODY_BYTES).await?;
        serde_json::from_slice(&bytes).context("Invalid stations search response")
    }
}

async fn read_limited(resp: reqwest::Response, limit: usize) -> Result<Vec<u8>> {
    if let Some(len) = resp.content_length() {
        if usize::try_from(len).map_or(true, |l| l > limit) {
            return Err(anyhow!("HTTP response too large ({len} bytes)"));
        }
    }

    let mut data: Vec<u8> = Vec::new();
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("HTTP body read error")?;
        if data.len().saturating_add(chunk.len()) > limit {
            return Err(anyhow!("HTTP response exceeded size limit"));
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}
