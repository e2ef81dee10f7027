use crate::server::{
    error::AppError,
    model::booking::{BookingFilter, BookingStatus, CreateBookingParams},
    service::booking::BookingService,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, booking::BookingFactory, helpers::create_booking_dependencies, room::RoomFactory,
        user::create_admin,
    },
};

mod create;

fn slot_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2099, 5, 4, 9, 0, 0).unwrap()
}

fn params(room_id: Option<i32>, participants: i32) -> CreateBookingParams {
    CreateBookingParams {
        room_id,
        started_at: slot_start(),
        ended_at: slot_start() + Duration::hours(1),
        participants,
    }
}
