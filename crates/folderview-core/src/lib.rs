//! # folderview-core
//!
//! Core crate for FolderView. Contains configuration schemas, typed
//! identifiers, the service marker trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FolderView crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
