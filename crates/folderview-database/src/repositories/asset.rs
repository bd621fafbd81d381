//! Asset repository: the PostgreSQL [`RecordStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use folderview_core::error::{AppError, ErrorKind};
use folderview_core::result::AppResult;
use folderview_core::types::OwnerId;
use folderview_entity::asset::AssetRecord;

use crate::store::RecordStore;

/// Columns selected for every asset query, with the size joined from
/// `asset_exif`.
const ASSET_COLUMNS: &str = "a.id, a.owner_id, a.original_path, a.visibility, a.deleted_at, \
     a.file_created_at, a.file_modified_at, a.local_date_time, \
     e.file_size_in_byte AS size_bytes";

/// Live/eligible filter. Mirrors `AssetRecord::is_live_eligible`.
const LIVE_ELIGIBLE: &str = "a.owner_id = $1 \
     AND a.deleted_at IS NULL \
     AND a.visibility = 'timeline' \
     AND a.file_created_at IS NOT NULL \
     AND a.file_modified_at IS NOT NULL \
     AND a.local_date_time IS NOT NULL";

/// Repository reading asset rows for the folder view.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    /// Create a new asset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for AssetRepository {
    async fn find_live_eligible(&self, owner: OwnerId) -> AppResult<Vec<AssetRecord>> {
        let sql = format!(
            "SELECT {ASSET_COLUMNS} FROM assets a \
             LEFT JOIN asset_exif e ON e.asset_id = a.id \
             WHERE {LIVE_ELIGIBLE} \
             ORDER BY a.original_path COLLATE \"C\" ASC, a.id ASC"
        );

        let rows = sqlx::query_as::<_, AssetRecord>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assets", e))?;

        debug!(owner = %owner, rows = rows.len(), "Loaded live assets");
        Ok(rows)
    }

    async fn find_live_eligible_under_prefix(
        &self,
        owner: OwnerId,
        path_prefix: &str,
    ) -> AppResult<Vec<AssetRecord>> {
        // starts_with() compares literally, so '%' and '_' in paths need no escaping.
        let sql = format!(
            "SELECT {ASSET_COLUMNS} FROM assets a \
             LEFT JOIN asset_exif e ON e.asset_id = a.id \
             WHERE {LIVE_ELIGIBLE} \
             AND ($2 = '' OR starts_with(a.original_path, $2)) \
             ORDER BY a.original_path COLLATE \"C\" ASC, a.id ASC"
        );

        let rows = sqlx::query_as::<_, AssetRecord>(&sql)
            .bind(owner)
            .bind(path_prefix)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list assets under '{path_prefix}'"),
                    e,
                )
            })?;

        debug!(owner = %owner, prefix = path_prefix, rows = rows.len(), "Loaded assets under prefix");
        Ok(rows)
    }
}
