table! {
    activities (id) {
        id -> BigInt,
        uid -> Text,
        title -> Text,
        date -> Text,
        description -> Text,
        category -> Text,
    }
}
