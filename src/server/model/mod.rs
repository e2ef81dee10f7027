//! Domain models and parameter types used between services and repositories.
//!
//! Domain models are converted from SeaORM entity models at the repository boundary and
//! into DTOs at the controller boundary, so neither entities nor DTOs leak into the
//! business logic.

pub mod auth;
pub mod booking;
