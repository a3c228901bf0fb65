//! In-memory store used by unit tests. Mirrors the transactional behavior of
//! the Postgres store: a failed insert leaves no row behind.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::ConnectionError;
use uuid::Uuid;

use crate::db::snapshot::models::{NewSnapshot, Snapshot};
use crate::db::snapshot::queries::InsertSnapshotError;
use crate::db::store::{EstablishConnectionError, SnapshotStore, StoreConnector};
use crate::db::talent::models::Talent;
use crate::db::talent::queries::FindTalentByYoutubeIdError;

#[derive(Debug, Default)]
pub struct MemoryState {
    pub talents: HashMap<String, Uuid>,
    pub rows: Vec<Snapshot>,
    pub connects: usize,
    pub closes: usize,
    pub lookups: usize,
    pub insert_attempts: usize,
    pub fail_connect: bool,
    pub fail_lookup: bool,
    pub fail_insert: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryConnector {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryConnector {
    pub fn with_talent(channel_id: &str, talent_id: Uuid) -> Self {
        let connector = Self::default();
        connector.state().talents.insert(channel_id.to_string(), talent_id);
        connector
    }

    pub fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }
}

impl StoreConnector for MemoryConnector {
    type Store = MemoryStore;

    fn connect(&self) -> Result<MemoryStore, EstablishConnectionError> {
        let mut state = self.state();
        if state.fail_connect {
            return Err(ConnectionError::BadConnection("connection refused".to_string()).into());
        }
        state.connects += 1;
        Ok(MemoryStore {
            state: Arc::clone(&self.state),
        })
    }
}

pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

fn database_error(message: &str) -> DieselError {
    DieselError::DatabaseError(DatabaseErrorKind::Unknown, Box::new(message.to_string()))
}

impl SnapshotStore for MemoryStore {
    fn find_talent(&mut self, channel_id: &str) -> Result<Option<Talent>, FindTalentByYoutubeIdError> {
        let mut state = self.state.lock().unwrap();
        state.lookups += 1;
        if state.fail_lookup {
            return Err(database_error("relation \"talents\" does not exist").into());
        }
        Ok(state.talents.get(channel_id).map(|id| Talent {
            id: *id,
            youtube_id: channel_id.to_string(),
        }))
    }

    fn insert_snapshot(&mut self, new: &NewSnapshot) -> Result<Snapshot, InsertSnapshotError> {
        let mut state = self.state.lock().unwrap();
        state.insert_attempts += 1;
        if state.fail_insert {
            return Err(database_error("insert or update on table \"snapshots\" violates foreign key constraint").into());
        }
        let row = Snapshot {
            talent_id: new.talent_id,
            sub_count: new.sub_count,
            view_count: new.view_count,
            video_count: new.video_count,
            recorded_at: Utc::now().naive_utc(),
        };
        state.rows.push(row.clone());
        Ok(row)
    }
}

impl Drop for MemoryStore {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.closes += 1;
        }
    }
}
