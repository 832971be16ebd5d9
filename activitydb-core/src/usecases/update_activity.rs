use super::prelude::*;
use crate::util::validate::{self, AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct UpdateActivity {
    pub title       : String,
    pub date        : String,
    pub description : String,
    pub category    : String,
}

impl TryFrom<UpdateActivity> for ActivityUpdate {
    type Error = Error;
    fn try_from(from: UpdateActivity) -> Result<Self> {
        let UpdateActivity {
            title,
            date,
            description,
            category,
        } = from;
        let update = ActivityUpdate {
            title,
            date: validate::parse_activity_date(&date)?,
            description,
            category: category.into(),
        }
        .auto_correct();
        update.validate()?;
        Ok(update)
    }
}

/// Overwrite all mutable fields of an existing activity.
///
/// Returns `None` if no activity with the given id exists.
/// Concurrent updates are not detected, the last one wins.
pub fn update_activity<R: ActivityRepo>(
    repo: &R,
    id: &str,
    update: UpdateActivity,
) -> Result<Option<Activity>> {
    let update = ActivityUpdate::try_from(update)?;
    let Some(old) = repo.try_get_activity(id)? else {
        return Ok(None);
    };
    let activity = old.apply(update);
    repo.update_activity(&activity)?;
    log::debug!("Updated activity {}", activity.id);
    Ok(Some(activity))
}
