use crate::{repositories, util::validate::ActivityInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The category is invalid")]
    Category,
    #[error("The date is invalid")]
    Date,
    #[error("The id is invalid")]
    Id,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ActivityInvalidation> for Error {
    fn from(err: ActivityInvalidation) -> Self {
        match err {
            ActivityInvalidation::Title => Self::Title,
            ActivityInvalidation::Category => Self::Category,
            ActivityInvalidation::Date => Self::Date,
        }
    }
}
