//! Organization factory for creating test organization entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test organizations with customizable fields.
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> OrganizationFactory<'a> {
    /// Creates a new OrganizationFactory named `"Organization {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Organization {}", next_id()),
        }
    }

    /// Sets the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the organization entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::organization::Model)` - Created organization entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::organization::Model, DbErr> {
        entity::organization::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
///
/// Shorthand for `OrganizationFactory::new(db).build().await`.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}
