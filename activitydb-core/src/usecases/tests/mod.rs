use super::prelude::*;
use std::cell::RefCell;


type RepoResult<T> = std::result::Result<T, RepoError>;
use crate::repositories::Error as RepoError;

#[derive(Default)]
pub struct MockDb {
    pub activities: RefCell<Vec<Activity>>,
}

impl ActivityRepo for MockDb {
    fn create_activity(&self, activity: Activity) -> RepoResult<()> {
        let mut activities = self.activities.borrow_mut();
        if activities.iter().any(|a| a.id == activity.id) {
            return Err(RepoError::AlreadyExists);
        }
        activities.push(activity);
        Ok(())
    }

    fn update_activity(&self, activity: &Activity) -> RepoResult<()> {
        let mut activities = self.activities.borrow_mut();
        let existing = activities
            .iter_mut()
            .find(|a| a.id == activity.id)
            .ok_or(RepoError::NotFound)?;
        *existing = activity.clone();
        Ok(())
    }

    fn get_activity(&self, id: &str) -> RepoResult<Activity> {
        self.activities
            .borrow()
            .iter()
            .find(|a| a.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_activities(&self) -> RepoResult<Vec<Activity>> {
        Ok(self.activities.borrow().clone())
    }

    fn count_activities(&self) -> RepoResult<usize> {
        Ok(self.activities.borrow().len())
    }
}
