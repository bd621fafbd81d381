//! Asset entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use folderview_core::error::AppError;
use folderview_core::result::AppResult;

use super::visibility::AssetVisibility;

/// A stored asset, tagged with a `/`-separated path but kept without any
/// real directory structure.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetRecord {
    /// Unique asset identifier.
    pub id: Uuid,
    /// The asset owner.
    pub owner_id: Uuid,
    /// Path the asset was imported from (e.g. `photos/2021/a.jpg`).
    pub original_path: Option<String>,
    /// Timeline/archive/hidden/locked.
    pub visibility: AssetVisibility,
    /// Soft-delete timestamp; `None` while the asset is live.
    pub deleted_at: Option<DateTime<Utc>>,
    /// File creation time reported by the source.
    pub file_created_at: Option<DateTime<Utc>>,
    /// File modification time reported by the source.
    pub file_modified_at: Option<DateTime<Utc>>,
    /// Capture time in the photographer's local zone.
    pub local_date_time: Option<DateTime<Utc>>,
    /// Size in bytes, joined from `asset_exif`.
    pub size_bytes: Option<i64>,
}

impl AssetRecord {
    /// Whether the asset is live (not soft-deleted) and eligible for the
    /// folder view.
    ///
    /// Must stay in sync with the `WHERE` clause used by the asset
    /// repository.
    pub fn is_live_eligible(&self) -> bool {
        self.deleted_at.is_none()
            && self.visibility == AssetVisibility::Timeline
            && self.file_created_at.is_some()
            && self.file_modified_at.is_some()
            && self.local_date_time.is_some()
    }

    /// The stored path, or a `MalformedRecord` error if it is absent or
    /// empty.
    ///
    /// An empty path would otherwise be indistinguishable from the root
    /// directory.
    pub fn path(&self) -> AppResult<&str> {
        match self.original_path.as_deref() {
            Some(path) if !path.trim_end_matches('/').is_empty() => Ok(path),
            Some(_) => Err(AppError::malformed_record(format!(
                "Asset {} has an empty original path",
                self.id
            ))),
            None => Err(AppError::malformed_record(format!(
                "Asset {} has no original path",
                self.id
            ))),
        }
    }

    /// Last path segment (the file name), if the path is present.
    pub fn file_name(&self) -> Option<&str> {
        self.original_path
            .as_deref()
            .map(|p| p.trim_end_matches('/'))
            .and_then(|p| p.rsplit('/').next())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folderview_core::error::ErrorKind;

    fn record(path: Option<&str>) -> AssetRecord {
        let now = Utc::now();
        AssetRecord {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            original_path: path.map(String::from),
            visibility: AssetVisibility::Timeline,
            deleted_at: None,
            file_created_at: Some(now),
            file_modified_at: Some(now),
            local_date_time: Some(now),
            size_bytes: Some(10),
        }
    }

    #[test]
    fn test_live_eligible() {
        assert!(record(Some("a/b.jpg")).is_live_eligible());

        let mut deleted = record(Some("a/b.jpg"));
        deleted.deleted_at = Some(Utc::now());
        assert!(!deleted.is_live_eligible());

        let mut archived = record(Some("a/b.jpg"));
        archived.visibility = AssetVisibility::Archive;
        assert!(!archived.is_live_eligible());

        let mut undated = record(Some("a/b.jpg"));
        undated.local_date_time = None;
        assert!(!undated.is_live_eligible());
    }

    #[test]
    fn test_path_rejects_missing_and_empty() {
        assert_eq!(record(Some("a/b.jpg")).path().unwrap(), "a/b.jpg");
        assert_eq!(
            record(None).path().unwrap_err().kind,
            ErrorKind::MalformedRecord
        );
        assert_eq!(
            record(Some("")).path().unwrap_err().kind,
            ErrorKind::MalformedRecord
        );
        assert_eq!(
            record(Some("//")).path().unwrap_err().kind,
            ErrorKind::MalformedRecord
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(record(Some("a/b/c.jpg")).file_name(), Some("c.jpg"));
        assert_eq!(record(Some("c.jpg")).file_name(), Some("c.jpg"));
        assert_eq!(record(None).file_name(), None);
    }
}
