//! Booking lifecycle: moves active bookings to completed once they have ended.
//!
//! `BookingLifecycleService` is the only automated writer of booking status. Every
//! trigger (the cron job, the request-path middleware) calls
//! `update_expired_booking_statuses`, which delegates to a single conditional UPDATE in
//! the booking store. There is no in-process lock; concurrent sweeps are made safe by
//! the store, which lets exactly one of them transition any given row.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{data::booking::BookingRepository, error::lifecycle::LifecycleError};

pub struct BookingLifecycleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingLifecycleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Completes every active booking that has ended as of now.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of bookings this call moved to completed; 0 when none
    ///   qualified or a concurrent sweep got to them first
    /// - `Err(LifecycleError::StoreUnavailable)` - The store could not be reached
    pub async fn update_expired_booking_statuses(&self) -> Result<u64, LifecycleError> {
        self.update_expired_booking_statuses_at(Utc::now()).await
    }

    /// Completes every active booking with `ended_at <= now`.
    ///
    /// Cancelled and completed bookings are never selected, so repeated calls with
    /// nothing newly expired return 0.
    pub async fn update_expired_booking_statuses_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, LifecycleError> {
        let count = BookingRepository::new(self.db)
            .complete_expired(now)
            .await?;

        if count > 0 {
            tracing::debug!("Completed {} expired booking(s) as of {}", count, now);
        }

        Ok(count)
    }
}
