use std::fmt;

use chrono::Local;
use interfaces_youtube_channels::index::BuildClientError;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;
use crate::db::snapshot::models::Snapshot;
use crate::db::store::{EstablishConnectionError, StoreConnector};
use crate::db::talent::queries::FindTalentByYoutubeIdError;
use crate::fetcher::{FetchStatsError, StatsFetcher};
use crate::resolver::resolve_talent_id;
use crate::writer::{save_snapshot, SaveSnapshotError};

pub const JOB_NAME: &str = "Yuura Intelligence Hub - Snapshot Fetcher";

/// Progress of a run. Each stage is entered only after the previous one
/// succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ApiConnected,
    StatsFetched,
    DbConnected,
    TalentResolved,
    SnapshotSaved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::ApiConnected => "api-connected",
            Stage::StatsFetched => "stats-fetched",
            Stage::DbConnected => "db-connected",
            Stage::TalentResolved => "talent-resolved",
            Stage::SnapshotSaved => "snapshot-saved",
        };
        f.write_str(name)
    }
}

/// Each wrapped error already names its operation, so the variants display
/// their source unchanged.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    BuildClient {
        #[from]
        source: BuildClientError,
    },

    #[error(transparent)]
    FetchStats {
        #[from]
        source: FetchStatsError,
    },

    #[error(transparent)]
    EstablishConnection {
        #[from]
        source: EstablishConnectionError,
    },

    #[error(transparent)]
    FindTalent {
        #[from]
        source: FindTalentByYoutubeIdError,
    },

    #[error("TalentNotFound: {channel_id}")]
    TalentNotFound { channel_id: String },

    #[error(transparent)]
    SaveSnapshot {
        #[from]
        source: SaveSnapshotError,
    },
}

impl RunError {
    /// Last stage completed before the run aborted.
    pub fn reached(&self) -> Stage {
        match self {
            RunError::BuildClient { .. } => Stage::Start,
            RunError::FetchStats { .. } => Stage::ApiConnected,
            RunError::EstablishConnection { .. } => Stage::StatsFetched,
            RunError::FindTalent { .. } | RunError::TalentNotFound { .. } => Stage::DbConnected,
            RunError::SaveSnapshot { .. } => Stage::TalentResolved,
        }
    }
}

/// Fetches the configured channel's statistics and stores one snapshot.
///
/// The store opened from `connector` lives only for the duration of this call
/// and is dropped (closing the connection) on every return path.
pub async fn run<C: StoreConnector>(config: &Config, connector: &C) -> Result<Snapshot, RunError> {
    let channel_id = config.channel_id.as_str();

    info!("{}", "=".repeat(60));
    info!("{JOB_NAME}");
    info!("{}", "=".repeat(60));
    info!(started_at = %Local::now().format("%Y-%m-%d %H:%M:%S"), channel_id, "run starting");

    info!(stage = %Stage::Start, "connecting to YouTube API");
    let fetcher = StatsFetcher::new(&config.youtube)
        .inspect_err(|err| error!("could not create YouTube API client: {err}"))?;
    info!(stage = %Stage::ApiConnected, "connected to YouTube API");

    info!(channel_id, "fetching channel statistics");
    let stats = fetcher
        .fetch(channel_id)
        .await
        .inspect_err(|_| error!("failed to fetch channel statistics"))?;
    info!(
        stage = %Stage::StatsFetched,
        subscribers = %format_count(stats.subscriber_count),
        views = %format_count(stats.view_count),
        videos = %format_count(stats.video_count),
        "statistics fetched"
    );

    info!("connecting to database");
    let mut store = connector
        .connect()
        .inspect_err(|err| error!("database connection error: {err}; check the DB_* credentials"))?;
    info!(stage = %Stage::DbConnected, "connected to database");

    info!("looking up talent in database");
    let Some(talent_id) = resolve_talent_id(&mut store, channel_id)? else {
        error!(channel_id, "talent not found in database");
        return Err(RunError::TalentNotFound {
            channel_id: channel_id.to_string(),
        });
    };
    info!(stage = %Stage::TalentResolved, %talent_id, "found talent");

    info!("saving snapshot to database");
    let snapshot = save_snapshot(&mut store, talent_id, &stats)?;
    info!(stage = %Stage::SnapshotSaved, recorded_at = %snapshot.recorded_at, "snapshot saved");

    Ok(snapshot)
}

/// `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
