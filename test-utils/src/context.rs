use std::path::PathBuf;

use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::{error::TestError, factory::helpers::next_id};

/// Test context containing the database connection for a single test.
///
/// Provides an in-memory SQLite database connection for isolated unit and integration
/// testing. The database is created lazily on first access and persists for the lifetime
/// of the test context.
#[derive(Default)]
pub struct TestContext {
    /// Optional database connection to the in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Database file of a file-backed context, removed on drop.
    file: Option<PathBuf>,
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self {
            db: None,
            file: None,
        }
    }

    /// Creates a context backed by a fresh temporary SQLite file.
    ///
    /// # Arguments
    /// - `max_connections` - Maximum number of pooled connections
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an open connection pool
    /// - `Err(TestError::Database)` - Failed to create or open the database file
    pub async fn file_backed(max_connections: u32) -> Result<Self, TestError> {
        let file = std::env::temp_dir().join(format!(
            "room-booking-test-{}-{}.sqlite",
            std::process::id(),
            next_id()
        ));

        let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=rwc", file.display()));
        opt.max_connections(max_connections).sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(Self {
            db: Some(db),
            file: Some(file),
        })
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            for suffix in ["", "-wal", "-shm"] {
                let mut path = file.clone().into_os_string();
                path.push(suffix);
                let _ = std::fs::remove_file(path);
            }
        }
    }
}
