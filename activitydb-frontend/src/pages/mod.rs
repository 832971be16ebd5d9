mod dashboard;
mod home;
mod not_found;

pub use self::{dashboard::*, home::*, not_found::*};
