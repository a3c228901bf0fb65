// Columns this job touches. Both tables are owned and migrated elsewhere.

diesel::table! {
    talents (id) {
        id -> Uuid,
        youtube_id -> Text,
    }
}

diesel::table! {
    snapshots (talent_id, recorded_at) {
        talent_id -> Uuid,
        sub_count -> Int4,
        view_count -> Int4,
        video_count -> Int4,
        recorded_at -> Timestamp,
    }
}

diesel::joinable!(snapshots -> talents (talent_id));

diesel::allow_tables_to_appear_in_same_query!(
    talents,
    snapshots,
);
