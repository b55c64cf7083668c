use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Either add individual entity tables with `with_table()`, or request the complete
/// migrated schema with `with_schema()` when a test relies on the unique relation indexes.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_schema()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether to run the migrator instead of (or before) the individual tables.
    migrate: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrate: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables with
    /// foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and article tables derived from the entities.
    ///
    /// Covers article and hashtag operations. Relation tables are left out on purpose
    /// since their unique pair index only exists in the migrations; use `with_schema()`
    /// for like and subscribe tests.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_article_tables(self) -> Self {
        self.with_table(User)
            .with_table(Article)
            .with_table(ArticleHashtag)
    }

    /// Adds the user and project tables derived from the entities.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_project_tables(self) -> Self {
        self.with_table(User).with_table(Project)
    }

    /// Runs every migration during `build()`, producing the production schema.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_schema(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Runs the migrations first when requested, then executes the CREATE TABLE
    /// statements added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with the schema ready
    /// - `Err(TestError::Database)` - Failed to connect, migrate or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrate {
            setup.with_migrations().await?;
        }

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
