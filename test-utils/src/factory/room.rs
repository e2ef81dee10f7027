//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    organization_id: i32,
    name: String,
    capacity: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {id}"`
    /// - capacity: `10`
    pub fn new(db: &'a DatabaseConnection, organization_id: i32) -> Self {
        Self {
            db,
            organization_id,
            name: format!("Room {}", next_id()),
            capacity: 10,
        }
    }

    /// Sets the room name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the maximum number of participants the room holds.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            organization_id: ActiveValue::Set(self.organization_id),
            name: ActiveValue::Set(self.name),
            capacity: ActiveValue::Set(self.capacity),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
pub async fn create_room(
    db: &DatabaseConnection,
    organization_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, organization_id).build().await
}
