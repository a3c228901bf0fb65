//! YouTube channel snapshot collector
//!
//! - Channel statistics fetch in `fetcher`
//! - PostgreSQL models and queries in `db/`
//! - One run = fetch, resolve talent, insert snapshot (`pipeline`)
//! - Exit status mapping for the binary in `job`
//! - Requires YOUTUBE_API_KEY and DB_* env vars (see `config`)

pub mod config;
pub mod db;
pub mod fetcher;
pub mod job;
pub mod pipeline;
pub mod resolver;
pub mod writer;
