//! Booking factory for creating test booking entities.
//!
//! This module provides factory methods for creating booking entities with
//! sensible defaults. Status is written verbatim so tests can seed any state,
//! including terminal ones.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, user.id)
///     .room_id(Some(room.id))
///     .ended_at(Utc::now() - Duration::minutes(1))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::booking::Model,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - room_id: `None`
    /// - started_at: 1 hour from now
    /// - ended_at: 2 hours from now
    /// - status: `"active"`
    /// - participants: `fixture::booking::DEFAULT_PARTICIPANTS`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user owning the booking
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let now = Utc::now();
        let entity = fixture::booking::entity_builder()
            .user_id(user_id)
            .started_at(now + Duration::hours(1))
            .ended_at(now + Duration::hours(2))
            .created_at(now)
            .build();

        Self { db, entity }
    }

    /// Sets the booked room.
    pub fn room_id(mut self, room_id: Option<i32>) -> Self {
        self.entity.room_id = room_id;
        self
    }

    /// Sets the start of the booked interval.
    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.entity.started_at = started_at;
        self
    }

    /// Sets the end of the booked interval.
    ///
    /// Moves `started_at` one hour before `ended_at` when the current start would no
    /// longer precede it.
    pub fn ended_at(mut self, ended_at: DateTime<Utc>) -> Self {
        if self.entity.started_at >= ended_at {
            self.entity.started_at = ended_at - Duration::hours(1);
        }
        self.entity.ended_at = ended_at;
        self
    }

    /// Sets the raw status column.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Sets the participant count.
    pub fn participants(mut self, participants: i32) -> Self {
        self.entity.participants = participants;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            room_id: ActiveValue::Set(self.entity.room_id),
            user_id: ActiveValue::Set(self.entity.user_id),
            started_at: ActiveValue::Set(self.entity.started_at),
            ended_at: ActiveValue::Set(self.entity.ended_at),
            status: ActiveValue::Set(self.entity.status),
            participants: ActiveValue::Set(self.entity.participants),
            created_at: ActiveValue::Set(self.entity.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upcoming active booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: Option<i32>,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id)
        .room_id(room_id)
        .build()
        .await
}

/// Creates an active booking whose interval ended at `ended_at`.
pub async fn create_expired_booking(
    db: &DatabaseConnection,
    user_id: i32,
    ended_at: DateTime<Utc>,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id)
        .ended_at(ended_at)
        .build()
        .await
}
