use tracing::{error, warn};
use uuid::Uuid;

use crate::db::store::SnapshotStore;
use crate::db::talent::queries::FindTalentByYoutubeIdError;

/// Looks up the talent tracked under `channel_id`. `Ok(None)` means the
/// reference data has not been seeded; both that and a query error are logged.
pub fn resolve_talent_id<S: SnapshotStore>(
    store: &mut S,
    channel_id: &str,
) -> Result<Option<Uuid>, FindTalentByYoutubeIdError> {
    match store.find_talent(channel_id) {
        Ok(Some(talent)) => Ok(Some(talent.id)),
        Ok(None) => {
            warn!(channel_id, "no talent found with this YouTube ID; seed the talents table first");
            Ok(None)
        }
        Err(err) => {
            error!(channel_id, "database error looking up talent: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryConnector;
    use crate::db::store::StoreConnector;

    #[test]
    fn known_channel_resolves_to_talent_id() {
        let talent_id = Uuid::new_v4();
        let connector = MemoryConnector::with_talent("UCknown", talent_id);
        let mut store = connector.connect().unwrap();

        assert_eq!(resolve_talent_id(&mut store, "UCknown").unwrap(), Some(talent_id));
    }

    #[test]
    fn unknown_channel_is_not_found() {
        let connector = MemoryConnector::with_talent("UCknown", Uuid::new_v4());
        let mut store = connector.connect().unwrap();

        assert_eq!(resolve_talent_id(&mut store, "UCother").unwrap(), None);
    }

    #[test]
    fn query_error_is_returned() {
        let connector = MemoryConnector::with_talent("UCknown", Uuid::new_v4());
        connector.state().fail_lookup = true;
        let mut store = connector.connect().unwrap();

        assert!(resolve_talent_id(&mut store, "UCknown").is_err());
    }
}
