use crate::{category::*, id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id          : Id,
    pub title       : String,
    pub date        : ActivityDate,
    pub description : String,
    pub category    : Category,
}

impl Activity {
    /// Relative path of the image that represents the category.
    pub fn image_path(&self) -> String {
        self.category.image_path()
    }

    /// Replace all mutable fields while keeping the identity.
    pub fn apply(self, update: ActivityUpdate) -> Self {
        let ActivityUpdate {
            title,
            date,
            description,
            category,
        } = update;
        Self {
            id: self.id,
            title,
            date,
            description,
            category,
        }
    }
}

/// Mutable fields of an activity.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityUpdate {
    pub title       : String,
    pub date        : ActivityDate,
    pub description : String,
    pub category    : Category,
}
