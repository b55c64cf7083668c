//! Shared failure handling for like and subscribe relations.
//!
//! Every (target, actor, kind) triple is either absent or present. Registering a present
//! relation and cancelling an absent one are reported as `Conflict` and `NotFound`.

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Like,
    Subscribe,
}

impl RelationKind {
    fn noun(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Subscribe => "subscription",
        }
    }
}

/// Identifies one relation row for error messages.
#[derive(Debug, Clone, Copy)]
pub struct RelationRef {
    pub kind: RelationKind,
    /// "article" or "project"
    pub target: &'static str,
    pub target_id: i32,
    pub user_id: i32,
}

impl RelationRef {
    pub fn conflict(&self) -> AppError {
        tracing::debug!(
            "User {} already has a {} on {} {}",
            self.user_id,
            self.kind.noun(),
            self.target,
            self.target_id
        );

        AppError::Conflict(format!(
            "A {} on {} {} already exists",
            self.kind.noun(),
            self.target,
            self.target_id
        ))
    }

    pub fn not_found(&self) -> AppError {
        AppError::NotFound(format!(
            "No {} on {} {} to cancel",
            self.kind.noun(),
            self.target,
            self.target_id
        ))
    }

    /// Converts a failed insert, reporting a unique index violation as a conflict.
    ///
    /// Two concurrent registers may both pass the existence check; the index rejects
    /// the second insert.
    pub fn insert_error(&self, err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => self.conflict(),
            _ => err.into(),
        }
    }
}
