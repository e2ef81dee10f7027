//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let organization = factory::create_organization(&db).await?;
//! let user = factory::create_user(&db, organization.id).await?;
//!
//! // Create with all dependencies
//! let (organization, user, room) = factory::helpers::create_booking_dependencies(&db).await?;
//! let booking = factory::create_booking(&db, user.id, Some(room.id)).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, user.id)
//!     .ended_at(Utc::now() - Duration::minutes(5))
//!     .status("cancelled")
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod helpers;
pub mod organization;
pub mod room;
pub mod user;

pub use booking::create_booking;
pub use organization::create_organization;
pub use room::create_room;
pub use user::create_user;
