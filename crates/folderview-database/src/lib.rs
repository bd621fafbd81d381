//! # folderview-database
//!
//! PostgreSQL connection management, migrations, and the record store
//! that feeds asset rows to the folder view.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::AssetRepository;
pub use store::{InMemoryRecordStore, RecordStore};
