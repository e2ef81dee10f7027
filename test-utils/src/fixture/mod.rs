//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and provide the default values
//! used by the factory builders. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let booking = fixture::booking::entity();
//!
//! // Create with custom fields
//! let cancelled = fixture::booking::entity_builder()
//!     .status("cancelled")
//!     .build();
//! ```

pub mod booking;

pub use booking::{entity as booking_entity, entity_builder as booking_entity_builder};
