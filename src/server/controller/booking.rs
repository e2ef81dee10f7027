use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingListQuery, CreateBookingDto, PaginatedBookingsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{BookingFilter, BookingStatus},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Get paginated bookings.
///
/// Returns the bookings visible to the requester, ordered by start time. Admins see
/// every booking and may filter by owner; other users only see their own bookings.
/// Expired bookings are completed before the page is read.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Page of bookings
/// - `400 Bad Request` - Unknown status filter or zero page size
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(BookingListQuery),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PaginatedBookingsDto),
        (status = 400, description = "Invalid filter or pagination", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let status = query
        .status
        .as_deref()
        .map(|value| {
            BookingStatus::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown booking status: {}", value)))
        })
        .transpose()?;

    let filter = BookingFilter {
        user_id: query.user_id,
        room_id: query.room_id,
        status,
    };

    let page = BookingService::new(&state.db)
        .get_paginated(&user, filter, query.page, query.per_page)
        .await?;

    let dto = PaginatedBookingsDto {
        bookings: page.bookings.into_iter().map(|b| b.into_dto()).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a new booking.
///
/// Books an optional room for the authenticated user. The booking starts out
/// `active`.
///
/// # Returns
/// - `201 Created` - Successfully created booking
/// - `400 Bad Request` - Invalid interval, participants, capacity, or overlap
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Room does not exist in the user's organization
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .create(&user, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Get a booking by ID.
///
/// # Returns
/// - `200 OK` - The booking
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Booking missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .get_by_id(&user, booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Cancel a booking.
///
/// Moves an active booking to `cancelled`. Only the owner or an admin may cancel.
///
/// # Returns
/// - `200 OK` - The cancelled booking
/// - `400 Bad Request` - Booking is already completed or cancelled
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Booking missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully cancelled booking", body = BookingDto),
        (status = 400, description = "Booking is not active", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .cancel(&user, booking_id)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
