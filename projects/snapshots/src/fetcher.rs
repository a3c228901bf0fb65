use interfaces_youtube_channels::index::{
    build_client, fetch_channel_statistics, BuildClientError, FetchChannelStatisticsError,
    YouTubeApiResult,
};
use interfaces_youtube_channels::response::{ApiErrorResponse, ChannelListResponse, Counter};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::YouTubeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStats {
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
}

/// Why a channel's statistics could not be fetched. Callers abort the run on
/// any variant; the split exists for diagnostics and tests.
#[derive(Debug, Error)]
pub enum FetchStatsError {
    #[error("ChannelNotFound: {channel_id}")]
    NotFound { channel_id: String },

    #[error("Api: {status}: {message}")]
    Api {
        status: StatusCode,
        reason: Option<String>,
        message: String,
    },

    #[error("Transport: {source}")]
    Transport {
        #[from]
        source: FetchChannelStatisticsError,
    },

    #[error("MalformedResponse: {detail}")]
    MalformedResponse { detail: String },
}

impl FetchStatsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchStatsError::NotFound { .. })
    }
}

pub struct StatsFetcher {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StatsFetcher {
    pub fn new(config: &YouTubeConfig) -> Result<Self, BuildClientError> {
        Ok(Self {
            client: build_client()?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// One `channels.list` call. Failures are logged here before being returned.
    pub async fn fetch(&self, channel_id: &str) -> Result<ChannelStats, FetchStatsError> {
        let result = fetch_channel_statistics(&self.client, &self.base_url, &self.api_key, channel_id)
            .await
            .map_err(FetchStatsError::from)
            .and_then(|response| parse_channel_statistics(channel_id, &response));

        match &result {
            Ok(stats) => debug!(channel_id, ?stats, "channel statistics decoded"),
            Err(FetchStatsError::NotFound { .. }) => warn!(channel_id, "channel not found"),
            Err(FetchStatsError::Api { status, reason, message }) => error!(
                channel_id,
                %status,
                reason = reason.as_deref().unwrap_or("unknown"),
                "YouTube API error: {message}"
            ),
            Err(err) => error!(channel_id, "could not fetch channel statistics: {err}"),
        }

        result
    }
}

pub fn parse_channel_statistics(
    channel_id: &str,
    response: &YouTubeApiResult,
) -> Result<ChannelStats, FetchStatsError> {
    if !response.status.is_success() {
        return Err(api_error(response));
    }

    let parsed: ChannelListResponse = serde_json::from_str(&response.body)
        .map_err(|e| FetchStatsError::MalformedResponse { detail: e.to_string() })?;

    let channel = parsed
        .items
        .and_then(|items| items.into_iter().next())
        .ok_or_else(|| FetchStatsError::NotFound {
            channel_id: channel_id.to_string(),
        })?;

    let statistics = channel.statistics.ok_or_else(|| FetchStatsError::MalformedResponse {
        detail: "channel has no statistics".to_string(),
    })?;

    Ok(ChannelStats {
        subscriber_count: counter_or_zero("subscriberCount", statistics.subscriber_count.as_ref())?,
        view_count: counter_or_zero("viewCount", statistics.view_count.as_ref())?,
        video_count: counter_or_zero("videoCount", statistics.video_count.as_ref())?,
    })
}

fn counter_or_zero(field: &str, counter: Option<&Counter>) -> Result<u64, FetchStatsError> {
    match counter {
        None => Ok(0),
        Some(counter) => counter.value().ok_or_else(|| FetchStatsError::MalformedResponse {
            detail: format!("{field} is not a non-negative integer: {counter:?}"),
        }),
    }
}

fn api_error(response: &YouTubeApiResult) -> FetchStatsError {
    match serde_json::from_str::<ApiErrorResponse>(&response.body) {
        Ok(ApiErrorResponse { error }) => FetchStatsError::Api {
            status: response.status,
            reason: error.reason().map(str::to_string),
            message: error.message,
        },
        Err(_) => FetchStatsError::Api {
            status: response.status,
            reason: None,
            message: response
                .status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        },
    }
}
