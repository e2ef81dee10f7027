//! Booking fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::booking;

/// Default owner ID for bookings.
pub const DEFAULT_USER_ID: i32 = 1;

/// Default booking status.
pub const DEFAULT_STATUS: &str = "active";

/// Default participant count.
pub const DEFAULT_PARTICIPANTS: i32 = 4;

/// Default start of the booked interval, 2024-01-01T09:00:00Z.
pub fn default_started_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

/// Default end of the booked interval, 2024-01-01T10:00:00Z.
pub fn default_ended_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
}

/// Creates a booking entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - room_id: `None`
/// - user_id: `1`
/// - started_at: `2024-01-01T09:00:00Z`
/// - ended_at: `2024-01-01T10:00:00Z`
/// - status: `"active"`
/// - participants: `4`
/// - created_at: `2024-01-01T09:00:00Z`
pub fn entity() -> booking::Model {
    entity_builder().build()
}

/// Creates a booking entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let booking = fixture::booking::entity_builder()
///     .status("completed")
///     .participants(2)
///     .build();
/// ```
pub fn entity_builder() -> BookingEntityBuilder {
    BookingEntityBuilder::default()
}

/// Builder for creating customized booking entity models.
pub struct BookingEntityBuilder {
    id: i32,
    room_id: Option<i32>,
    user_id: i32,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
    status: String,
    participants: i32,
    created_at: DateTime<Utc>,
}

impl Default for BookingEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            room_id: None,
            user_id: DEFAULT_USER_ID,
            started_at: default_started_at(),
            ended_at: default_ended_at(),
            status: DEFAULT_STATUS.to_string(),
            participants: DEFAULT_PARTICIPANTS,
            created_at: default_started_at(),
        }
    }
}

impl BookingEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn room_id(mut self, room_id: Option<i32>) -> Self {
        self.room_id = room_id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn ended_at(mut self, ended_at: DateTime<Utc>) -> Self {
        self.ended_at = ended_at;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn participants(mut self, participants: i32) -> Self {
        self.participants = participants;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the booking entity model.
    pub fn build(self) -> booking::Model {
        booking::Model {
            id: self.id,
            room_id: self.room_id,
            user_id: self.user_id,
            started_at: self.started_at,
            ended_at: self.ended_at,
            status: self.status,
            participants: self.participants,
            created_at: self.created_at,
        }
    }
}
