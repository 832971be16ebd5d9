use activitydb_db_sqlite::{self as db, DbReadOnly, DbReadWrite};
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

use super::api::ApiError;

/// Database connections as a request guard.
#[derive(Clone)]
pub struct Connections(db::Connections);

impl Connections {
    /// Read access that may be shared with concurrent requests.
    pub fn shared(&self) -> Result<DbReadOnly<'_>, ApiError> {
        Ok(self.0.shared()?)
    }

    pub fn exclusive(&self) -> Result<DbReadWrite<'_>, ApiError> {
        Ok(self.0.exclusive()?)
    }
}

impl From<db::Connections> for Connections {
    fn from(from: db::Connections) -> Self {
        Self(from)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<Self>() {
            Some(connections) => Outcome::Success(connections.clone()),
            None => {
                error!("No database connections available");
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}
