//! Request processing shared by the HTTP routes.
//!
//! - `auth` resolves bearer tokens to users and checks permissions
//! - `booking_lifecycle` refreshes booking statuses before bookings are read

pub mod auth;
pub mod booking_lifecycle;
