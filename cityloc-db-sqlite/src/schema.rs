///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    locations (rowid) {
        rowid -> BigInt,
        id -> Text,
        city_key -> Text,
        city -> Text,
        country -> Text,
        lat -> Double,
        lng -> Double,
        summary -> Nullable<Text>,
        created_at -> BigInt,
        timezone -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Key/Value
///////////////////////////////////////////////////////////////////////

table! {
    key_values (key) {
        key -> Text,
        value -> Text,
    }
}
