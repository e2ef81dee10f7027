//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db, organization.id)
///     .name("CustomUser")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    organization_id: i32,
    email: String,
    name: String,
    admin: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - admin: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `organization_id` - Organization the user belongs to
    pub fn new(db: &'a DatabaseConnection, organization_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            organization_id,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            admin: false,
        }
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the admin status for the user.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            organization_id: ActiveValue::Set(self.organization_id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            admin: ActiveValue::Set(self.admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin user with default values.
///
/// Shorthand for `UserFactory::new(db, organization_id).build().await`.
pub async fn create_user(
    db: &DatabaseConnection,
    organization_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, organization_id).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(
    db: &DatabaseConnection,
    organization_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, organization_id)
        .admin(true)
        .build()
        .await
}
