use thiserror::Error;
use diesel::{dsl::now, prelude::*};
use crate::db::{snapshot::models::*, schema::snapshots::dsl::*};

#[derive(Debug, Error)]
pub enum InsertSnapshotError {
    #[error("InsertSnapshot: {source}")]
    InsertSnapshot {
        #[from]
        source: diesel::result::Error,
    },
}

/// Inserts one row stamped with the database's `NOW()` and commits it. Any
/// error rolls the transaction back before it is returned.
pub fn insert_snapshot(
    conn: &mut PgConnection,
    new: &NewSnapshot,
) -> Result<Snapshot, InsertSnapshotError> {
    conn.transaction(|conn| {
        diesel::insert_into(snapshots)
            .values((
                talent_id.eq(new.talent_id),
                sub_count.eq(new.sub_count),
                view_count.eq(new.view_count),
                video_count.eq(new.video_count),
                recorded_at.eq(now),
            ))
            .returning(Snapshot::as_returning())
            .get_result(conn)
            .map_err(|source| InsertSnapshotError::InsertSnapshot { source })
    })
}
