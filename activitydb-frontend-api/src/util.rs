use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

pub const STATUS_NOT_FOUND: u16 = 404;

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if response.ok() {
        return Ok(response.json().await?);
    }
    // Not every failure comes with a JSON body
    match response.json::<activitydb_boundary::Error>().await {
        Ok(err) => Err(err.into()),
        Err(_) => Err(Error::Fetch(format!(
            "{} (HTTP status {})",
            response.status_text(),
            response.status()
        ))),
    }
}

/// Like [`into_json`] but a 404 response with an empty body results in `None`.
pub async fn into_optional_json<T>(response: Response) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    if response.status() == STATUS_NOT_FOUND {
        return Ok(None);
    }
    into_json(response).await.map(Some)
}
