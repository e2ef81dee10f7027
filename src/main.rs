use room_booking::server::{
    config::Config, router, scheduler::booking_lifecycle, service::auth::JwtService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), room_booking::server::error::AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // Dropping the scheduler stops the job
    let _scheduler =
        booking_lifecycle::start_scheduler(db.clone(), &config.booking_lifecycle_cron).await?;

    let state = AppState::new(db, JwtService::new(&config.jwt_secret));
    let app = router::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
