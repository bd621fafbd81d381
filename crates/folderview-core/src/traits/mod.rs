//! Core traits defined in `folderview-core` and implemented by other crates.

pub mod service;

pub use service::Service;
