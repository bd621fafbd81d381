//! Virtual folder entities.

pub mod stats;

pub use stats::FolderStats;
