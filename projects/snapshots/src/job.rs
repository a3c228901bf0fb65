//! Process-level wrapper around one run: config, connector, and the mapping
//! from outcome to exit status.

use thiserror::Error;
use tokio::task::JoinError;
use tracing::info;

use crate::config::{Config, LoadConfigError};
use crate::db::store::PgConnector;
use crate::pipeline::{self, RunError};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("LoadConfig: {source}")]
    LoadConfig {
        #[source]
        source: LoadConfigError,
    },
    #[error("Run: {source}")]
    Run {
        #[source]
        source: RunError,
    },
    #[error("Panicked: {source}")]
    Panicked {
        #[source]
        source: JoinError,
    },
}

/// Loads the config and runs the pipeline against Postgres.
pub async fn collect_snapshot() -> Result<(), MainError> {
    let config = Config::load().map_err(|source| MainError::LoadConfig { source })?;
    let connector = PgConnector::new(&config.database);

    pipeline::run(&config, &connector)
        .await
        .map_err(|source| MainError::Run { source })?;

    info!("{}", "=".repeat(60));
    info!("snapshot collection completed successfully");
    info!("{}", "=".repeat(60));

    Ok(())
}

/// Folds a failed join (the job task panicked) into the job's own error.
pub fn settle(joined: Result<Result<(), MainError>, JoinError>) -> Result<(), MainError> {
    joined.unwrap_or_else(|source| Err(MainError::Panicked { source }))
}

pub fn exit_status(outcome: &Result<(), MainError>) -> u8 {
    match outcome {
        Ok(()) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
