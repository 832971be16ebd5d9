pub use activitydb_boundary::*;

use activitydb_core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn update_activity(from: UpdateActivity) -> usecases::UpdateActivity {
        let UpdateActivity {
            title,
            date,
            description,
            category,
        } = from;
        usecases::UpdateActivity {
            title,
            date,
            description,
            category,
        }
    }
}
