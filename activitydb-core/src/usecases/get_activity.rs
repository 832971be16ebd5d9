use super::prelude::*;

/// Look up a single activity.
///
/// A missing activity is not an error and results in `None`.
pub fn get_activity<R: ActivityRepo>(repo: &R, id: &str) -> Result<Option<Activity>> {
    Ok(repo.try_get_activity(id)?)
}
