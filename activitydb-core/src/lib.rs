pub use activitydb_entities as entities;

pub mod repositories;
pub mod usecases;
pub mod util;
