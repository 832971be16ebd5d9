use super::prelude::*;

pub fn list_activities<R: ActivityRepo>(repo: &R) -> Result<Vec<Activity>> {
    Ok(repo.all_activities()?)
}
