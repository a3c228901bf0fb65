use chrono::NaiveDateTime;
use uuid::Uuid;
use diesel::prelude::*;
use thiserror::Error;
use crate::db::schema::snapshots;
use crate::fetcher::ChannelStats;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = snapshots)]
pub struct Snapshot {
    pub talent_id: Uuid,
    pub sub_count: i32,
    pub view_count: i32,
    pub video_count: i32,
    pub recorded_at: NaiveDateTime,
}

/// Row to insert; `recorded_at` is filled in by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSnapshot {
    pub talent_id: Uuid,
    pub sub_count: i32,
    pub view_count: i32,
    pub video_count: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountOutOfRangeError {
    #[error("CountOutOfRange: {column} = {value} does not fit an INTEGER column")]
    CountOutOfRange { column: &'static str, value: u64 },
}

impl NewSnapshot {
    pub fn from_stats(talent_id: Uuid, stats: &ChannelStats) -> Result<Self, CountOutOfRangeError> {
        Ok(Self {
            talent_id,
            sub_count: to_column("sub_count", stats.subscriber_count)?,
            view_count: to_column("view_count", stats.view_count)?,
            video_count: to_column("video_count", stats.video_count)?,
        })
    }
}

fn to_column(column: &'static str, value: u64) -> Result<i32, CountOutOfRangeError> {
    i32::try_from(value).map_err(|_| CountOutOfRangeError::CountOutOfRange { column, value })
}
