//! Folder view entry points: unique directories, direct contents, stats.

use std::sync::Arc;

use tracing::{debug, warn};

use folderview_core::result::AppResult;
use folderview_core::traits::Service;
use folderview_core::types::OwnerId;
use folderview_database::store::RecordStore;
use folderview_entity::asset::AssetRecord;
use folderview_entity::folder::FolderStats;

use super::aggregate::aggregate;
use super::children::direct_children_of;
use super::directories::unique_directories;
use super::path::DirectoryPath;
use crate::context::RequestContext;

/// Builds the virtual folder view for the requesting owner.
#[derive(Debug, Clone)]
pub struct ViewService {
    /// Source of the owner's live, eligible records.
    store: Arc<dyn RecordStore>,
}

impl Service for ViewService {}

impl ViewService {
    /// Creates a new view service.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Every distinct directory that holds at least one of the owner's
    /// assets, in ascending order.
    pub async fn list_unique_directories(
        &self,
        ctx: &RequestContext,
    ) -> AppResult<Vec<DirectoryPath>> {
        let records = self.store.find_live_eligible(ctx.owner_id).await?;
        let records = retain_live_eligible(ctx.owner_id, records);

        let directories = unique_directories(&records)?;
        debug!(
            owner_id = %ctx.owner_id,
            records = records.len(),
            directories = directories.len(),
            "Listed unique directories"
        );
        Ok(directories)
    }

    /// Assets exactly one level below `path`, ordered by file name.
    pub async fn list_direct_contents(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> AppResult<Vec<AssetRecord>> {
        let directory = DirectoryPath::new(path);
        let records = self
            .store
            .find_live_eligible_under_prefix(ctx.owner_id, &directory.member_prefix())
            .await?;
        let records = retain_live_eligible(ctx.owner_id, records);

        let children = direct_children_of(&directory, records)?;
        debug!(
            owner_id = %ctx.owner_id,
            directory = %directory,
            assets = children.len(),
            "Listed direct contents"
        );
        Ok(children)
    }

    /// Statistics for `path` itself followed by each immediate subfolder.
    ///
    /// Both parts are computed from one retrieval, so the self row always
    /// covers every child row.
    pub async fn get_folder_stats(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> AppResult<Vec<FolderStats>> {
        let directory = DirectoryPath::new(path);
        // The bare directory string also selects a record named exactly like
        // the directory; siblings sharing the prefix are dropped by `aggregate`.
        let records = self
            .store
            .find_live_eligible_under_prefix(ctx.owner_id, directory.as_str())
            .await?;
        let records = retain_live_eligible(ctx.owner_id, records);

        let stats = aggregate(&directory, &records)?;
        debug!(
            owner_id = %ctx.owner_id,
            directory = %directory,
            records = records.len(),
            rows = stats.len(),
            "Computed folder stats"
        );
        Ok(stats)
    }
}

/// Drops records that belong to another owner or are not live and eligible.
fn retain_live_eligible(owner: OwnerId, mut records: Vec<AssetRecord>) -> Vec<AssetRecord> {
    let before = records.len();
    records.retain(|r| r.owner_id == owner.into_uuid() && r.is_live_eligible());

    let dropped = before - records.len();
    if dropped > 0 {
        warn!(
            owner_id = %owner,
            dropped,
            "Record store returned records outside the live, eligible set"
        );
    }
    records
}
