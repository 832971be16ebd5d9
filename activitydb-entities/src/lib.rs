#![deny(missing_debug_implementations)]

//! # activitydb-entities
//!
//! Reusable, agnostic domain entities for activitydb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod activity;
pub mod category;
pub mod id;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
