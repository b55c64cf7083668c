//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks and the at-most-one like/subscribe rule
//! - **Orchestration**: Coordinating repository calls with the image store and GitHub
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod article;
pub mod auth;
pub mod image;
pub mod project;
pub mod relation;

#[cfg(test)]
mod test;

use sea_orm::DbErr;

use crate::server::error::AppError;

/// Converts a repository "record not found" into a 404, other errors pass through.
pub(crate) fn lookup_error(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
        err => err.into(),
    }
}
