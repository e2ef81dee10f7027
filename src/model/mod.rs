//! API data transfer objects shared by controllers and tests.

pub mod api;
pub mod booking;
