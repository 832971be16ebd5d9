mod create_activity;
mod error;
mod get_activity;
mod list_activities;
mod update_activity;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_activity::*, error::Error, get_activity::*, list_activities::*, update_activity::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{activity::*, id::*},
        repositories::*,
    };
}
