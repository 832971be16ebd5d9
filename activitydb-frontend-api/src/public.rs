use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use activitydb_app::{FormSubmission, QueryService};
use activitydb_boundary::{Activity, UpdateActivity};

use crate::{into_json, util::into_optional_json, Error, Result};

/// Public activitydb API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    fn activity_url(&self, id: &str) -> String {
        let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC);
        format!("{}/activities/{encoded_id}", self.url)
    }

    pub async fn activities(&self) -> Result<Vec<Activity>> {
        let url = format!("{}/activities", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    /// Fetch a single activity, `None` if it does not exist.
    pub async fn activity(&self, id: &str) -> Result<Option<Activity>> {
        let response = Request::get(&self.activity_url(id)).send().await?;
        into_optional_json(response).await
    }

    pub async fn update_activity(
        &self,
        id: &str,
        update: &UpdateActivity,
    ) -> Result<Option<Activity>> {
        let response = Request::put(&self.activity_url(id))
            .json(update)?
            .send()
            .await?;
        into_optional_json(response).await
    }

    pub async fn version(&self) -> Result<String> {
        let url = format!("{}/version", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}

impl QueryService for PublicApi {
    type Error = Error;

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        self.activities().await
    }

    async fn get_activity(&self, id: &str) -> Result<Option<Activity>> {
        self.activity(id).await
    }
}

impl FormSubmission for PublicApi {
    type Error = Error;

    async fn submit(&self, id: &str, update: &UpdateActivity) -> Result<Option<Activity>> {
        self.update_activity(id, update).await
    }
}
