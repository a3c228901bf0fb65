use diesel::{Connection, ConnectionError, PgConnection};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::db::snapshot::models::{NewSnapshot, Snapshot};
use crate::db::snapshot::queries::{insert_snapshot, InsertSnapshotError};
use crate::db::talent::models::Talent;
use crate::db::talent::queries::{find_talent_by_youtube_id, FindTalentByYoutubeIdError};

/// The two statements a run issues against an open connection.
pub trait SnapshotStore {
    fn find_talent(&mut self, channel_id: &str) -> Result<Option<Talent>, FindTalentByYoutubeIdError>;

    fn insert_snapshot(&mut self, new: &NewSnapshot) -> Result<Snapshot, InsertSnapshotError>;
}

/// Opens one store per run. The store is closed when it is dropped.
pub trait StoreConnector {
    type Store: SnapshotStore;

    fn connect(&self) -> Result<Self::Store, EstablishConnectionError>;
}

#[derive(Debug, Error)]
pub enum EstablishConnectionError {
    #[error("EstablishConnection: {source}")]
    EstablishConnection {
        #[from]
        source: ConnectionError,
    },
}

pub struct PgConnector {
    conninfo: String,
}

impl PgConnector {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            conninfo: config.conninfo(),
        }
    }
}

impl StoreConnector for PgConnector {
    type Store = PgSnapshotStore;

    fn connect(&self) -> Result<PgSnapshotStore, EstablishConnectionError> {
        let conn = PgConnection::establish(&self.conninfo)
            .map_err(|source| EstablishConnectionError::EstablishConnection { source })?;
        Ok(PgSnapshotStore::new(conn))
    }
}

pub struct PgSnapshotStore {
    conn: PgConnection,
}

impl PgSnapshotStore {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }
}

impl SnapshotStore for PgSnapshotStore {
    fn find_talent(&mut self, channel_id: &str) -> Result<Option<Talent>, FindTalentByYoutubeIdError> {
        find_talent_by_youtube_id(&mut self.conn, channel_id)
    }

    fn insert_snapshot(&mut self, new: &NewSnapshot) -> Result<Snapshot, InsertSnapshotError> {
        insert_snapshot(&mut self.conn, new)
    }
}

impl Drop for PgSnapshotStore {
    fn drop(&mut self) {
        info!("database connection closed");
    }
}
