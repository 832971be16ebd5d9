use super::json_error_response;
use anyhow::anyhow;
pub use activitydb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, status, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Answered with an empty body
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        ParameterError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::NotFound | Error::Parameter(ParameterError::Repo(RepoError::NotFound)) => {
                status::NotFound(()).respond_to(req)
            }
            Error::Parameter(ParameterError::Repo(err)) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::Parameter(err) => json_error_response(req, &err, Status::BadRequest),
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
