//! # Taskboard Shared Library
//!
//! Shared types and business logic used by the taskboard API server and the
//! client synchronization store.
//!
//! ## Module Organization
//!
//! - `models`: database models (users, boards, columns, tasks, tags,
//!   notifications) and their CRUD operations
//! - `engine`: the board mutation engine — multi-table operations with
//!   invariant enforcement and notification emission
//! - `auth`: password hashing
//! - `db`: connection pool and migrations
//! - `error`: the shared error taxonomy

pub mod auth;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;

/// Current version of the taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
