//! # folderview-entity
//!
//! Domain entity models for FolderView. `AssetRecord` mirrors a row of the
//! `assets` table (with its size joined from `asset_exif`); `FolderStats`
//! is a transient aggregate computed per query and never persisted.

pub mod asset;
pub mod folder;
