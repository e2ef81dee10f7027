//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep entity types out of the business logic where a domain model
//! exists.

pub mod booking;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
