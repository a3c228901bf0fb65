use reqwest::{Client, StatusCode};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

const CHANNELS_PATH: &str = "/youtube/v3/channels";
const USER_AGENT: &str = concat!("yuura-snapshots/", env!("CARGO_PKG_VERSION"));

pub struct YouTubeApiResult {
    pub body: String,
    pub status: StatusCode,
}

pub fn build_client() -> Result<Client, BuildClientError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| BuildClientError::ClientBuild { source })
}

/// Requests the `statistics` part of a single channel.
///
/// Non-2xx responses are returned as-is; interpreting the status and body is
/// left to the caller.
pub async fn fetch_channel_statistics(
    client: &Client,
    base_url: &str,
    api_key: &str,
    channel_id: &str,
) -> Result<YouTubeApiResult, FetchChannelStatisticsError> {
    let url = format!("{}{CHANNELS_PATH}", base_url.trim_end_matches('/'));

    let response = client
        .get(url)
        .query(&[("part", "statistics"), ("id", channel_id), ("key", api_key)])
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|source| FetchChannelStatisticsError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchChannelStatisticsError::ResponseRead { source })?;

    Ok(YouTubeApiResult { body, status })
}

#[derive(Debug, Error)]
pub enum BuildClientError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum FetchChannelStatisticsError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
