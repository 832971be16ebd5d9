use std::fmt::Display;

use crate::{Activity, UpdateActivity};

/// Read access to activities
#[allow(async_fn_in_trait)]
pub trait QueryService {
    type Error: Display;

    async fn list_activities(&self) -> Result<Vec<Activity>, Self::Error>;

    /// `None` if no activity with this id exists
    async fn get_activity(&self, id: &str) -> Result<Option<Activity>, Self::Error>;
}

/// Saves the edit form
#[allow(async_fn_in_trait)]
pub trait FormSubmission {
    type Error: Display;

    async fn submit(
        &self,
        id: &str,
        update: &UpdateActivity,
    ) -> Result<Option<Activity>, Self::Error>;
}
