// Low-level database access traits.
// A repository is responsible for a single entity and
// never loads or modifies other entities.

use crate::entities::activity::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ActivityRepo {
    fn create_activity(&self, activity: Activity) -> Result<()>;
    fn update_activity(&self, activity: &Activity) -> Result<()>;

    fn get_activity(&self, id: &str) -> Result<Activity>;
    fn try_get_activity(&self, id: &str) -> Result<Option<Activity>> {
        match self.get_activity(id) {
            Ok(activity) => Ok(Some(activity)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    // In insertion order
    fn all_activities(&self) -> Result<Vec<Activity>>;
    fn count_activities(&self) -> Result<usize>;
}
