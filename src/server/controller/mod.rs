//! HTTP request handlers.
//!
//! Controllers parse requests into validated parameters, resolve the current user through
//! `AuthGuard`, call a service and convert the result into a DTO response.

pub mod article;
pub mod auth;
pub mod project;
