//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique names and emails
/// across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates everything a booking references.
///
/// Creates an organization, a user and a room of that organization, all with default
/// values. Use the individual factories to customize specific entities.
///
/// # Returns
/// - `Ok((organization, user, room))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::organization::Model,
        entity::user::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let organization = crate::factory::organization::create_organization(db).await?;
    let user = crate::factory::user::create_user(db, organization.id).await?;
    let room = crate::factory::room::create_room(db, organization.id).await?;

    Ok((organization, user, room))
}
