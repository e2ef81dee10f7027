use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::booking_lifecycle::BookingLifecycleService};

/// Starts the booking lifecycle scheduler
///
/// Each tick completes every active booking that has ended. A failed run is logged
/// and abandoned; the next tick runs the same sweep again.
///
/// The returned scheduler must be kept alive for the job to keep firing.
///
/// # Arguments
/// - `db`: Database connection
/// - `schedule`: Cron expression with seconds, e.g. `0 * * * * *` for every minute
pub async fn start_scheduler(
    db: DatabaseConnection,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = run_booking_lifecycle(&db).await {
                tracing::error!("Error updating expired booking statuses: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Booking lifecycle scheduler started ({})", schedule);

    Ok(scheduler)
}

/// Runs one lifecycle sweep and reports how many bookings were completed.
pub async fn run_booking_lifecycle(db: &DatabaseConnection) -> Result<u64, AppError> {
    let count = BookingLifecycleService::new(db)
        .update_expired_booking_statuses()
        .await?;

    if count > 0 {
        tracing::info!("Marked {} expired booking(s) as completed", count);
    }

    Ok(count)
}
