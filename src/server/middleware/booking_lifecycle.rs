use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::server::{service::booking_lifecycle::BookingLifecycleService, state::AppState};

/// Completes expired bookings before a booking read is served.
///
/// Only `GET` requests trigger the sweep. A failed sweep is logged and the request
/// continues; the read may then show bookings that have ended as still active until
/// the next sweep succeeds.
pub async fn refresh_booking_statuses(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::GET {
        match BookingLifecycleService::new(&state.db)
            .update_expired_booking_statuses()
            .await
        {
            Ok(count) if count > 0 => {
                tracing::debug!(
                    "Completed {} expired booking(s) before serving {}",
                    count,
                    request.uri().path()
                );
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(
                    "Booking status refresh failed, serving {} with possibly stale statuses: {}",
                    request.uri().path(),
                    e
                );
            }
        }
    }

    next.run(request).await
}
