//! Virtual folder view over flat, path-tagged asset records.
//!
//! - [`path`]: normalization and segment arithmetic
//! - [`directories`]: the distinct parent directories of a record set
//! - [`children`]: records exactly one level below a directory
//! - [`aggregate`]: per-folder count/size/last-modified statistics
//! - [`service`]: the entry points used by the API layer

pub mod aggregate;
pub mod children;
pub mod directories;
pub mod path;
pub mod service;

pub use aggregate::aggregate;
pub use children::direct_children_of;
pub use directories::unique_directories;
pub use path::DirectoryPath;
pub use service::ViewService;
