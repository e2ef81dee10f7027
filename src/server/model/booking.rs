//! Domain & parameter models for booking operations
//!
//! Defines the booking domain model together with its status state machine, the
//! parameter models for creating and listing bookings, and conversions from entity
//! models and into DTOs.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::error::{internal::InternalError, AppError},
};

/// Status of a booking.
///
/// ```text
/// active --(ended_at <= now, lifecycle sweep)--> completed  [terminal]
/// active --(user cancellation)------------------> cancelled [terminal]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Active,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Value stored in the `booking.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Parses the stored column value, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether no further transition is defined out of this status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The booking domain model
///
/// A reservation of an optional room by a user for the half-open interval
/// `[started_at, ended_at)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    /// None once the room has been deleted
    pub room_id: Option<i32>,
    pub user_id: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub participants: i32,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to the booking domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking domain model
    /// - `Err(AppError::InternalErr(UnknownBookingStatus))` - The stored status is not
    ///   one of the known values
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let status = BookingStatus::parse(&entity.status).ok_or_else(|| {
            InternalError::UnknownBookingStatus {
                booking_id: entity.id,
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            room_id: entity.room_id,
            user_id: entity.user_id,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            status,
            participants: entity.participants,
            created_at: entity.created_at,
        })
    }

    /// Converts the domain model into its API representation
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            room_id: self.room_id,
            user_id: self.user_id,
            started_at: self.started_at,
            ended_at: self.ended_at,
            status: self.status.to_string(),
            participants: self.participants,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new booking
///
/// The owner is the authenticated user and is passed separately.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub room_id: Option<i32>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub participants: i32,
}

impl From<CreateBookingDto> for CreateBookingParams {
    fn from(dto: CreateBookingDto) -> Self {
        Self {
            room_id: dto.room_id,
            started_at: dto.started_at,
            ended_at: dto.ended_at,
            participants: dto.participants,
        }
    }
}

/// Filters for listing bookings. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub user_id: Option<i32>,
    pub room_id: Option<i32>,
    pub status: Option<BookingStatus>,
}
