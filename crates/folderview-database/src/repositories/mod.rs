//! Repository implementations for FolderView entities.

pub mod asset;

pub use asset::AssetRepository;
