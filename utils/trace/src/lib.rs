use tracing_subscriber::prelude::*;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Targets that log every request at `info`; capped so job output stays readable.
const QUIET_TARGETS: &[&str] = &["hyper=warn", "hyper_util=warn", "reqwest=warn"];

/// Installs the global subscriber, writing to stderr. `RUST_LOG` overrides
/// `level` when set.
pub fn init(level: &str) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .map_err(|source| TracingInitError::InvalidFilter { source })?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

fn default_directives(level: &str) -> String {
    let mut directives = vec![level.to_string()];
    directives.extend(QUIET_TARGETS.iter().map(|target| (*target).to_string()));
    directives.join(",")
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("Invalid filter config: {source}")]
    InvalidFilter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to set global default subscriber: {source}")]
    SetGlobalDefault {
        #[from]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}
