//! Booking business logic: creation rules, visibility, and cancellation.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::AppError,
    model::booking::{Booking, BookingFilter, BookingStatus, CreateBookingParams},
    service::booking_lifecycle::BookingLifecycleService,
};

/// A page of bookings together with pagination metadata.
#[derive(Debug, Clone)]
pub struct BookingPage {
    pub bookings: Vec<Booking>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking owned by `owner`
    ///
    /// # Validation
    /// - at least one participant
    /// - `started_at` strictly before `ended_at`
    /// - the room, when given, exists in the owner's organization, holds the
    ///   participants, and has no other active booking overlapping the interval; the
    ///   overlap check is part of the insert, so concurrent requests cannot both win
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created active booking
    /// - `Err(AppError::BadRequest)` - A validation rule failed
    /// - `Err(AppError::NotFound)` - Room does not exist or belongs to another organization
    /// - `Err(AppError)` - Database error
    pub async fn create(
        &self,
        owner: &entity::user::Model,
        param: CreateBookingParams,
    ) -> Result<Booking, AppError> {
        if param.participants < 1 {
            return Err(AppError::BadRequest(
                "A booking needs at least one participant".to_string(),
            ));
        }
        if param.started_at >= param.ended_at {
            return Err(AppError::BadRequest(
                "A booking must start before it ends".to_string(),
            ));
        }

        let repo = BookingRepository::new(self.db);

        if let Some(room_id) = param.room_id {
            let room = RoomRepository::new(self.db)
                .find_by_id(room_id)
                .await?
                .filter(|room| room.organization_id == owner.organization_id)
                .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

            if param.participants > room.capacity {
                return Err(AppError::BadRequest(format!(
                    "Room {} holds at most {} participants",
                    room.name, room.capacity
                )));
            }
        }

        let booking = repo
            .create(owner.id, param)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest("Room is already booked for this time".to_string())
            })?;

        tracing::info!(
            "User {} booked {:?} from {} to {} (booking {})",
            owner.id,
            booking.room_id,
            booking.started_at,
            booking.ended_at,
            booking.id
        );

        Ok(booking)
    }

    /// Gets a booking visible to `requester`
    ///
    /// Admins see every booking; other users only their own. Bookings the requester
    /// may not see are reported as missing so their existence is not leaked.
    pub async fn get_by_id(
        &self,
        requester: &entity::user::Model,
        id: i32,
    ) -> Result<Option<Booking>, AppError> {
        let booking = BookingRepository::new(self.db).find_by_id(id).await?;

        Ok(booking.filter(|booking| requester.admin || booking.user_id == requester.id))
    }

    /// Gets a page of bookings visible to `requester`
    ///
    /// Non-admin requesters are restricted to their own bookings regardless of the
    /// `user_id` in the filter.
    pub async fn get_paginated(
        &self,
        requester: &entity::user::Model,
        mut filter: BookingFilter,
        page: u64,
        per_page: u64,
    ) -> Result<BookingPage, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "per_page must be greater than zero".to_string(),
            ));
        }

        if !requester.admin {
            filter.user_id = Some(requester.id);
        }

        let (bookings, total) = BookingRepository::new(self.db)
            .get_paginated(&filter, page, per_page)
            .await?;

        Ok(BookingPage {
            bookings,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Cancels an active booking on behalf of its owner or an admin
    ///
    /// Expired bookings are completed first, so a booking that has already ended is
    /// reported as completed rather than cancelled.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking after cancellation
    /// - `Err(AppError::NotFound)` - Booking missing or not visible to the requester
    /// - `Err(AppError::BadRequest)` - Booking already ended or cancelled
    /// - `Err(AppError::LifecycleErr)` - Expired bookings could not be completed
    pub async fn cancel(
        &self,
        requester: &entity::user::Model,
        id: i32,
    ) -> Result<Booking, AppError> {
        let now = Utc::now();
        let repo = BookingRepository::new(self.db);

        BookingLifecycleService::new(self.db)
            .update_expired_booking_statuses_at(now)
            .await?;

        let booking = self
            .get_by_id(requester, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.status.is_terminal() {
            return Err(not_cancellable(booking.status));
        }

        if !repo.cancel(id, now).await? {
            // Cancelled or completed concurrently
            let status = repo
                .find_by_id(id)
                .await?
                .map_or(BookingStatus::Cancelled, |booking| booking.status);
            return Err(not_cancellable(status));
        }

        tracing::info!("User {} cancelled booking {}", requester.id, id);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }
}

fn not_cancellable(status: BookingStatus) -> AppError {
    match status {
        BookingStatus::Cancelled => {
            AppError::BadRequest("Booking is already cancelled".to_string())
        }
        _ => AppError::BadRequest("Booking has already ended".to_string()),
    }
}
