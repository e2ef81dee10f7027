//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services implement business
//! rules and validation, coordinate repository calls, and work with domain models rather
//! than DTOs or entity models.

pub mod auth;
pub mod booking;
pub mod booking_lifecycle;
