//! Core type definitions used across the FolderView workspace.

pub mod id;

pub use id::*;
