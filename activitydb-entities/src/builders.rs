pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::activity_builder::*;

pub mod activity_builder {

    use super::*;
    use crate::{activity::*, category::*, id::*, time::*};

    #[derive(Debug)]
    pub struct ActivityBuild {
        activity: Activity,
    }

    impl ActivityBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.activity.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.activity.title = title.into();
            self
        }
        pub fn date(mut self, date: &str) -> Self {
            self.activity.date = date.parse().unwrap();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.activity.description = desc.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.activity.category = category.into();
            self
        }
        pub fn finish(self) -> Activity {
            self.activity
        }
    }

    impl Builder for Activity {
        type Build = ActivityBuild;
        fn build() -> ActivityBuild {
            ActivityBuild {
                activity: Activity {
                    id: Id::new(),
                    title: "".into(),
                    date: ActivityDate::Day(time::macros::date!(2024 - 01 - 01)),
                    description: "".into(),
                    category: Category::from(Category::CULTURE),
                },
            }
        }
    }
}
