//! # folderview-service
//!
//! Business logic for FolderView. The [`view`] module turns a flat set of
//! path-tagged asset records into a virtual folder hierarchy: the distinct
//! directories, the direct contents of one directory, and per-folder
//! statistics.
//!
//! Services follow constructor injection; the record store is handed in
//! as an `Arc<dyn RecordStore>`.

pub mod context;
pub mod view;

pub use context::RequestContext;
pub use view::ViewService;
