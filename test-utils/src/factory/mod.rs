//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation. Relation rows (likes and
//! subscribes) can be inserted directly to set up state the services must react to.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let article = factory::article::create_article(&db, user.id).await?;
//! factory::article::create_article_like(&db, article.id, user.id).await?;
//!
//! let (owner, project) = factory::helpers::create_project_with_owner(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `article` - Create article entities, hashtags, likes and subscribes
//! - `project` - Create project entities, likes and subscribes
//! - `helpers` - Shortcuts creating entities with their owner

pub mod article;
pub mod helpers;
pub mod project;
pub mod user;

pub use article::create_article;
pub use project::create_project;
pub use user::create_user;
