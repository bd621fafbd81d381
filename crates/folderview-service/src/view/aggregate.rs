//! Folder statistics for a directory and its immediate subfolders.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use folderview_core::result::AppResult;
use folderview_entity::asset::AssetRecord;
use folderview_entity::folder::FolderStats;

use super::path::{DirectoryPath, segment_at};

/// Running count/size/max-modified over a group of records.
#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    count: u64,
    size: i64,
    last_modified: Option<DateTime<Utc>>,
}

impl Totals {
    fn add(&mut self, record: &AssetRecord) {
        self.count += 1;
        self.size = self.size.saturating_add(record.size_bytes.unwrap_or(0));
        self.last_modified = match (self.last_modified, record.file_modified_at) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    fn into_stats(self, path: String, name: String) -> FolderStats {
        FolderStats {
            path,
            name,
            asset_count: self.count,
            total_size: self.size,
            last_modified: self.last_modified.unwrap_or_else(FolderStats::epoch),
        }
    }
}

/// Statistics for `directory` followed by one row per immediate child.
///
/// Every record that is the directory itself or lies anywhere below it
/// counts toward the directory's own row, which is emitted only when at
/// least one record matched. The same records are then grouped by the path
/// field at [`DirectoryPath::level`]; deeper descendants land in the bucket
/// of their top-level child and records with an empty field at that level
/// belong to no child. Child rows follow in ascending name order.
pub fn aggregate(
    directory: &DirectoryPath,
    records: &[AssetRecord],
) -> AppResult<Vec<FolderStats>> {
    let mut members = Vec::new();
    for record in records {
        let path = record.path()?;
        if directory.contains(path) {
            members.push((path, record));
        }
    }

    let own = self_totals(&members);
    let children = child_totals(directory, &members);

    let mut stats = Vec::with_capacity(children.len() + 1);
    if own.count > 0 {
        stats.push(own.into_stats(directory.to_string(), directory.name().to_string()));
    }
    stats.extend(children.into_iter().map(|(name, totals)| {
        totals.into_stats(directory.child(name).into(), name.to_string())
    }));
    Ok(stats)
}

fn self_totals(members: &[(&str, &AssetRecord)]) -> Totals {
    let mut totals = Totals::default();
    for (_, record) in members {
        totals.add(record);
    }
    totals
}

fn child_totals<'a>(
    directory: &DirectoryPath,
    members: &[(&'a str, &AssetRecord)],
) -> BTreeMap<&'a str, Totals> {
    let level = directory.level();
    let mut groups: BTreeMap<&str, Totals> = BTreeMap::new();
    for &(path, record) in members {
        let name = segment_at(path, level);
        if name.is_empty() {
            continue;
        }
        groups.entry(name).or_default().add(record);
    }
    groups
}
