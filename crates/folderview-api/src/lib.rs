//! # folderview-api
//!
//! HTTP API layer for FolderView built on Axum.
//!
//! Exposes the folder view endpoints and a health check, with bearer-token
//! authentication, CORS, request logging, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
