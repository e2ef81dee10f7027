use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Organization, User};
///
/// let test = TestBuilder::new()
///     .with_table(Organization)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Pool size of a file-backed database, `None` for the in-memory default.
    file_pool_size: Option<u32>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file_pool_size: None,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order, tables with foreign keys
    /// after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables a user needs: Organization and User.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Organization).with_table(User)
    }

    /// Adds all tables required for booking operations.
    ///
    /// Adds the following tables in dependency order:
    /// - Organization
    /// - User
    /// - Room
    /// - Booking
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(self) -> Self {
        self.with_user_tables().with_table(Room).with_table(Booking)
    }

    /// Backs the test database with a temporary file shared by a pool of connections.
    ///
    /// The in-memory default serializes every statement through a single connection.
    /// Tests that need statements to genuinely run in parallel, e.g. from spawned tasks
    /// on a multi-threaded runtime, use this instead. The file is removed when the
    /// `TestContext` is dropped.
    ///
    /// # Arguments
    /// - `max_connections` - Maximum number of pooled connections
    pub fn with_file_database(mut self, max_connections: u32) -> Self {
        self.file_pool_size = Some(max_connections);
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match self.file_pool_size {
            Some(max_connections) => TestContext::file_backed(max_connections).await?,
            None => TestContext::new(),
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
