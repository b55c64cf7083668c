//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Relation repositories (likes and subscribes) expose the pair-level primitives the
//! services compose: exists, create, find, delete and count.

pub mod article;
pub mod article_like;
pub mod article_subscribe;
pub mod project;
pub mod project_like;
pub mod project_subscribe;
pub mod user;
