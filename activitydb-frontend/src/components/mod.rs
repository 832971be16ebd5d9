mod activity_detail;
mod activity_list;
mod navbar;

pub use self::{activity_detail::*, activity_list::*, navbar::*};
