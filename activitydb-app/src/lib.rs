//! # activitydb-app
//!
//! Framework agnostic presentation model of the activitydb frontend.
//!
//! The route is the single source of truth for the selected activity
//! and the edit mode. All state changes happen in [`update`], side effects
//! are returned as [`Cmd`]s and executed with [`run`].

mod form;
mod page;
mod remote;
mod selection;
mod service;
mod update;

pub use self::{form::*, page::*, remote::*, selection::*, service::*, update::*};

pub use activitydb_boundary::{Activity, UpdateActivity};

const CATEGORY_IMAGE_DIR: &str = "/Images/categoryImages";

/// Image that represents the category of an activity.
pub fn category_image_path(category: &str) -> String {
    format!("{CATEGORY_IMAGE_DIR}/{category}.jpg")
}

#[cfg(test)]
mod tests;
