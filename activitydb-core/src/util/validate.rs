use activitydb_entities::{activity::ActivityUpdate, category::Category, time::ActivityDate};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

fn is_valid_title(s: &str) -> bool {
    !s.trim().is_empty()
}

#[derive(Debug, Error)]
pub enum ActivityInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("Invalid category")]
    Category,
    #[error("Invalid date")]
    Date,
}

pub fn parse_activity_date(s: &str) -> Result<ActivityDate, ActivityInvalidation> {
    s.parse().map_err(|err| {
        log::debug!("{err}");
        ActivityInvalidation::Date
    })
}

impl Validate for ActivityUpdate {
    type Error = ActivityInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_title(&self.title) {
            return Err(Self::Error::Title);
        }
        if self.category.is_blank() {
            return Err(Self::Error::Category);
        }
        Ok(())
    }
}

impl AutoCorrect for ActivityUpdate {
    fn auto_correct(mut self) -> Self {
        self.title = self.title.trim().to_owned();
        self.category = Category::from(self.category.as_str().trim());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(title: &str, category: &str) -> ActivityUpdate {
        ActivityUpdate {
            title: title.into(),
            date: "2024-05-01".parse().unwrap(),
            description: String::new(),
            category: category.into(),
        }
    }

    #[test]
    fn title_test() {
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("  \t"));
        assert!(is_valid_title("Hike"));
    }

    #[test]
    fn blank_title_or_category() {
        assert!(matches!(
            update(" ", "music").validate(),
            Err(ActivityInvalidation::Title)
        ));
        assert!(matches!(
            update("Concert", "").validate(),
            Err(ActivityInvalidation::Category)
        ));
        assert!(update("Concert", "music").validate().is_ok());
    }

    #[test]
    fn unknown_categories_are_valid() {
        assert!(update("Hike", "hiking").validate().is_ok());
    }

    #[test]
    fn date_test() {
        assert!(parse_activity_date("2024-05-01").is_ok());
        assert!(matches!(
            parse_activity_date("next friday"),
            Err(ActivityInvalidation::Date)
        ));
    }

    #[test]
    fn activity_autocorrect() {
        let x = update("  Hike ", " travel").auto_correct();
        assert_eq!(x.title, "Hike");
        assert_eq!(x.category.as_str(), "travel");
    }
}
