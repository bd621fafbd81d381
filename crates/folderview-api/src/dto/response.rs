//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folderview_entity::asset::AssetRecord;

/// Asset as shown in a folder listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    /// Asset ID.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Full virtual path.
    pub original_path: String,
    /// Last path segment.
    pub original_file_name: String,
    pub file_created_at: Option<DateTime<Utc>>,
    pub file_modified_at: Option<DateTime<Utc>>,
    pub local_date_time: Option<DateTime<Utc>>,
    /// Size in bytes, when known.
    pub file_size_in_byte: Option<i64>,
}

impl From<AssetRecord> for AssetResponse {
    fn from(record: AssetRecord) -> Self {
        let original_file_name = record.file_name().unwrap_or_default().to_string();
        Self {
            id: record.id,
            owner_id: record.owner_id,
            original_path: record.original_path.unwrap_or_default(),
            original_file_name,
            file_created_at: record.file_created_at,
            file_modified_at: record.file_modified_at,
            local_date_time: record.local_date_time,
            file_size_in_byte: record.size_bytes,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database state, omitted when no database is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}
