use super::{prelude::*, UpdateActivity};

#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct NewActivity {
    /// Keep an existing id, e.g. when importing
    pub id          : Option<String>,
    pub title       : String,
    pub date        : String,
    pub description : String,
    pub category    : String,
}

pub fn create_activity<R: ActivityRepo>(repo: &R, new_activity: NewActivity) -> Result<Id> {
    let NewActivity {
        id,
        title,
        date,
        description,
        category,
    } = new_activity;
    let id = match id {
        Some(id) => {
            let id = Id::from(id.trim());
            if !id.is_valid() {
                return Err(Error::Id);
            }
            id
        }
        None => Id::new(),
    };
    let update = ActivityUpdate::try_from(UpdateActivity {
        title,
        date,
        description,
        category,
    })?;
    let activity = Activity {
        id: id.clone(),
        title: update.title,
        date: update.date,
        description: update.description,
        category: update.category,
    };
    repo.create_activity(activity)?;
    log::debug!("Created activity {id}");
    Ok(id)
}
