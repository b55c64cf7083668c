//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Request DTOs become parameter types only after passing field validation.

pub mod article;
pub mod image;
pub mod project;
pub mod user;
pub mod validation;
