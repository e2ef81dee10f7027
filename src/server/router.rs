use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::booking,
    middleware::booking_lifecycle::refresh_booking_statuses,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Room Booking API"),
    tags(
        (name = "booking", description = "Room bookings of the authenticated user")
    )
)]
struct ApiDoc;

/// Builds the HTTP router with all API routes, the OpenAPI docs, and request tracing.
///
/// Booking routes are wrapped by the lifecycle middleware, which completes expired
/// bookings before each read.
pub fn router(state: AppState) -> Router {
    let (bookings, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(booking::get_bookings, booking::create_booking))
        .routes(routes!(booking::get_booking))
        .routes(routes!(booking::cancel_booking))
        .split_for_parts();

    let bookings = bookings.route_layer(middleware::from_fn_with_state(
        state.clone(),
        refresh_booking_statuses,
    ));

    Router::new()
        .merge(bookings)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
