use crate::server::{
    data::booking::BookingRepository,
    model::booking::{BookingFilter, BookingStatus, CreateBookingParams},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::create_booking_dependencies},
};

mod cancel;
mod find_by_id;
mod get_paginated;

/// Reads the raw status column of a booking.
async fn stored_status(db: &sea_orm::DatabaseConnection, id: i32) -> Result<String, DbErr> {
    let booking = entity::prelude::Booking::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

    Ok(booking.status)
}
