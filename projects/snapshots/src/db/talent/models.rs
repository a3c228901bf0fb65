use uuid::Uuid;
use diesel::prelude::*;
use crate::db::schema::talents;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = talents)]
pub struct Talent {
    pub id: Uuid,
    pub youtube_id: String,
}
