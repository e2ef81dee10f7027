pub mod prelude;

pub mod booking;
pub mod organization;
pub mod room;
pub mod user;
