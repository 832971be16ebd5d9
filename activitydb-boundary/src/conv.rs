use super::*;
use activitydb_entities as e;

impl From<e::activity::Activity> for Activity {
    fn from(from: e::activity::Activity) -> Self {
        let e::activity::Activity {
            id,
            title,
            date,
            description,
            category,
        } = from;
        Self {
            id: id.into(),
            title,
            date: date.to_string(),
            description,
            category: category.into(),
        }
    }
}

impl From<e::activity::Activity> for UpdateActivity {
    fn from(from: e::activity::Activity) -> Self {
        let e::activity::Activity {
            title,
            date,
            description,
            category,
            ..
        } = from;
        Self {
            title,
            date: date.to_string(),
            description,
            category: category.into(),
        }
    }
}
