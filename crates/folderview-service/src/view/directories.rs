//! Distinct virtual directories among a record set.

use std::collections::BTreeSet;

use folderview_core::result::AppResult;
use folderview_entity::asset::AssetRecord;

use super::path::DirectoryPath;

/// The deduplicated parent directories of `records`, in ascending order.
///
/// Records are expected to be the owner's live, eligible assets. A record
/// without a usable path fails the whole call with `MalformedRecord`.
pub fn unique_directories(records: &[AssetRecord]) -> AppResult<Vec<DirectoryPath>> {
    let mut directories = BTreeSet::new();
    for record in records {
        directories.insert(DirectoryPath::parent_of(record.path()?));
    }
    Ok(directories.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use folderview_core::error::ErrorKind;

    use super::*;
    use crate::view::fixtures::asset;
    use crate::view::path::parent_directory_of;

    fn strings(dirs: Vec<DirectoryPath>) -> Vec<String> {
        dirs.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_two_sibling_directories() {
        let owner = Uuid::new_v4();
        let records = vec![asset(owner, "a/b/x.jpg", 1), asset(owner, "a/c/y.jpg", 1)];

        let dirs = strings(unique_directories(&records).unwrap());
        assert_eq!(dirs, vec!["a/b", "a/c"]);
    }

    #[test]
    fn test_duplicates_collapse_and_every_dir_is_a_parent() {
        let owner = Uuid::new_v4();
        let records = vec![
            asset(owner, "photos/2021/a.jpg", 1),
            asset(owner, "photos/2021/b.jpg", 1),
            asset(owner, "photos/2021/", 1),
            asset(owner, "top.jpg", 1),
            asset(owner, "/abs/c.jpg", 1),
        ];

        let dirs = unique_directories(&records).unwrap();
        let unique: BTreeSet<_> = dirs.iter().collect();
        assert_eq!(unique.len(), dirs.len());

        for dir in &dirs {
            assert!(
                records
                    .iter()
                    .any(|r| parent_directory_of(r.path().unwrap()) == dir.as_str()),
                "{dir} is not the parent of any record"
            );
        }
        assert_eq!(strings(dirs), vec!["", "/abs", "photos/2021"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(unique_directories(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_path_is_malformed() {
        let owner = Uuid::new_v4();
        let mut broken = asset(owner, "x", 1);
        broken.original_path = None;

        let err = unique_directories(&[asset(owner, "a/b.jpg", 1), broken]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedRecord);
    }
}
