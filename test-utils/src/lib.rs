//! Spadeworker Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the spadeworker
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, either from individual entity tables or from the full migrated schema.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Factories inserting users, articles and projects with sensible defaults
//!
//! # Usage
//!
//! Tests that depend on the unique relation indexes should build the migrated schema:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_article_like() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_schema().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, article) = factory::helpers::create_article_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
