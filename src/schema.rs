table! {
    users (id) {
        id -> Int8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        deleted_at -> Nullable<Timestamptz>,
        name -> Text,
        email -> Text,
        age -> Int8,
        username -> Text,
        password -> Text,
    }
}
