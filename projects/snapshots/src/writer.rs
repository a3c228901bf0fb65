use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::db::snapshot::models::{CountOutOfRangeError, NewSnapshot, Snapshot};
use crate::db::snapshot::queries::InsertSnapshotError;
use crate::db::store::SnapshotStore;
use crate::fetcher::ChannelStats;

#[derive(Debug, Error)]
pub enum SaveSnapshotError {
    #[error(transparent)]
    CountOutOfRange {
        #[from]
        source: CountOutOfRangeError,
    },

    #[error(transparent)]
    InsertSnapshot {
        #[from]
        source: InsertSnapshotError,
    },
}

/// Writes one snapshot for `talent_id`. Nothing is persisted on error.
pub fn save_snapshot<S: SnapshotStore>(
    store: &mut S,
    talent_id: Uuid,
    stats: &ChannelStats,
) -> Result<Snapshot, SaveSnapshotError> {
    let result = NewSnapshot::from_stats(talent_id, stats)
        .map_err(SaveSnapshotError::from)
        .and_then(|new| store.insert_snapshot(&new).map_err(SaveSnapshotError::from));

    if let Err(err) = &result {
        error!(%talent_id, "{}: {err}", failure_message(err));
    }

    result
}

fn failure_message(err: &SaveSnapshotError) -> &'static str {
    match err {
        SaveSnapshotError::CountOutOfRange { .. } => "snapshot counts rejected before insert",
        SaveSnapshotError::InsertSnapshot { .. } => "database error saving snapshot",
    }
}
