use thiserror::Error;

/// Failures of the booking lifecycle sweep.
///
/// Finding nothing to transition is not an error; the sweep then reports a count of 0.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// The booking store could not be reached, timed out, or rejected the update.
    ///
    /// The sweep performs no retries. The scheduled trigger gives up for the current
    /// tick and the request-path trigger logs and serves the read anyway.
    #[error("Booking store unavailable: {0}")]
    StoreUnavailable(#[from] sea_orm::DbErr),
}
