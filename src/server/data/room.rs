//! Room data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Repository providing read access to room records.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a room by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Room found
    /// - `Ok(None)` - No room with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }
}
