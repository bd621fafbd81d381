//! The record store consumed by the folder view.
//!
//! [`RecordStore`] is the only way the view layer reads assets. The
//! PostgreSQL [`AssetRepository`](crate::repositories::AssetRepository) is
//! the production implementation; [`InMemoryRecordStore`] backs the tests.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use folderview_core::result::AppResult;
use folderview_core::types::OwnerId;
use folderview_entity::asset::AssetRecord;

/// Read access to an owner's live, eligible asset records.
///
/// Implementations must only return records that belong to `owner` and
/// satisfy [`AssetRecord::is_live_eligible`], with `size_bytes` already
/// joined. Rows come back ordered by `(original_path, id)`.
#[async_trait]
pub trait RecordStore: Debug + Send + Sync + 'static {
    /// All live, eligible records for the owner, unfiltered by path.
    async fn find_live_eligible(&self, owner: OwnerId) -> AppResult<Vec<AssetRecord>>;

    /// Live, eligible records whose path starts with `path_prefix`.
    ///
    /// The prefix is compared literally. An empty prefix matches every
    /// record.
    async fn find_live_eligible_under_prefix(
        &self,
        owner: OwnerId,
        path_prefix: &str,
    ) -> AppResult<Vec<AssetRecord>>;
}

/// Record store backed by a vector held in memory.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<AssetRecord>>,
}

impl InMemoryRecordStore {
    /// Create a store holding the given records.
    pub fn new(records: Vec<AssetRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Add a record.
    pub async fn insert(&self, record: AssetRecord) {
        self.records.write().await.push(record);
    }

    /// Soft-delete a record. Returns `true` if it existed.
    pub async fn soft_delete(&self, id: Uuid) -> bool {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.deleted_at = Some(chrono::Utc::now());
                true
            }
            None => false,
        }
    }

    async fn select<F>(&self, owner: OwnerId, predicate: F) -> Vec<AssetRecord>
    where
        F: Fn(&AssetRecord) -> bool,
    {
        let records = self.records.read().await;
        let mut selected: Vec<AssetRecord> = records
            .iter()
            .filter(|r| r.owner_id == owner.into_uuid() && r.is_live_eligible())
            .filter(|r| predicate(r))
            .cloned()
            .collect();

        selected.sort_by(|a, b| {
            a.original_path
                .cmp(&b.original_path)
                .then_with(|| a.id.cmp(&b.id))
        });
        selected
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_live_eligible(&self, owner: OwnerId) -> AppResult<Vec<AssetRecord>> {
        Ok(self.select(owner, |_| true).await)
    }

    async fn find_live_eligible_under_prefix(
        &self,
        owner: OwnerId,
        path_prefix: &str,
    ) -> AppResult<Vec<AssetRecord>> {
        Ok(self
            .select(owner, |r| {
                path_prefix.is_empty()
                    || r.original_path
                        .as_deref()
                        .is_some_and(|p| p.starts_with(path_prefix))
            })
            .await)
    }
}
