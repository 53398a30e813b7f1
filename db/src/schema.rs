diesel::table! {
    artists (id) {
        id -> Uuid,
        name -> Text,
        city -> Text,
        state -> Text,
        phone -> Nullable<Text>,
        genres -> Text,
        image_link -> Nullable<Text>,
        facebook_link -> Nullable<Text>,
        website_link -> Nullable<Text>,
        seeking_venue -> Bool,
        seeking_description -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    shows (id) {
        id -> Uuid,
        artist_id -> Uuid,
        venue_id -> Uuid,
        start_time -> Timestamp,
        created_at -> Timestamp,
    }
}

diesel::table! {
    venues (id) {
        id -> Uuid,
        name -> Text,
        city -> Text,
        state -> Text,
        address -> Text,
        phone -> Nullable<Text>,
        genres -> Text,
        image_link -> Nullable<Text>,
        facebook_link -> Nullable<Text>,
        website_link -> Nullable<Text>,
        seeking_talent -> Bool,
        seeking_description -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(shows -> artists (artist_id));
diesel::joinable!(shows -> venues (venue_id));

diesel::allow_tables_to_appear_in_same_query!(artists, shows, venues);
