use diesel::prelude::*;
use crate::db::{schema::talents::dsl::*, talent::models::*};

#[derive(Debug, thiserror::Error)]
pub enum FindTalentByYoutubeIdError {
    #[error("FindTalentByYoutubeId: {source}")]
    FindTalentByYoutubeId {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn find_talent_by_youtube_id(
    conn: &mut PgConnection,
    channel_id: &str,
) -> Result<Option<Talent>, FindTalentByYoutubeIdError> {
    talents
        .filter(youtube_id.eq(channel_id))
        .select(Talent::as_select())
        .first(conn)
        .optional()
        .map_err(|source| FindTalentByYoutubeIdError::FindTalentByYoutubeId { source })
}
