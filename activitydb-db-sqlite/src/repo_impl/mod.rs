use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use activitydb_core::{
    entities::{activity::*, time::ActivityDate},
    repositories::{self as repo, *},
};

use super::*;

mod activity;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_activity_date(date: &str) -> Result<ActivityDate> {
    date.parse()
        .map_err(|err| anyhow!("Invalid stored activity date: {err}").into())
}
