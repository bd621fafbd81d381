//! Aggregate statistics for a virtual folder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of count, total size, and latest modification for one virtual
/// folder. Built fresh per query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderStats {
    /// Folder path without trailing separator (empty for the root).
    pub path: String,
    /// Last path segment (empty for the root).
    pub name: String,
    /// Number of assets at any depth below the folder.
    pub asset_count: u64,
    /// Summed size in bytes; 0 when no size data exists.
    pub total_size: i64,
    /// Latest `file_modified_at`; the Unix epoch when none exists.
    pub last_modified: DateTime<Utc>,
}

impl FolderStats {
    /// Timestamp reported when no asset carries a modification time.
    pub fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::default()
    }
}
