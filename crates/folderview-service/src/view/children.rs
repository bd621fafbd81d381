//! One-level membership: records directly inside a directory.

use folderview_core::result::AppResult;
use folderview_entity::asset::AssetRecord;

use super::path::{DirectoryPath, SEPARATOR, normalize};

/// Records whose normalized path is exactly one segment below `directory`.
///
/// A record matches when its path starts with `directory + "/"` and the
/// remainder is non-empty and has no further `/`. Grandchildren and a record
/// named exactly like the directory are excluded. Results are ordered by
/// file name (byte-wise ascending); ties keep their input order.
pub fn direct_children_of(
    directory: &DirectoryPath,
    records: Vec<AssetRecord>,
) -> AppResult<Vec<AssetRecord>> {
    let prefix = directory.member_prefix();

    let mut children = Vec::new();
    for record in records {
        let name = match normalize(record.path()?).strip_prefix(prefix.as_str()) {
            Some(rest) if !rest.is_empty() && !rest.contains(SEPARATOR) => rest.to_string(),
            _ => continue,
        };
        children.push((name, record));
    }

    // Stable, so equal names keep retrieval order.
    children.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(children.into_iter().map(|(_, record)| record).collect())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use folderview_core::error::ErrorKind;

    use super::*;
    use crate::view::fixtures::asset;

    fn paths(records: &[AssetRecord]) -> Vec<&str> {
        records
            .iter()
            .filter_map(|r| r.original_path.as_deref())
            .collect()
    }

    #[test]
    fn test_grandchildren_are_excluded() {
        let owner = Uuid::new_v4();
        let records = vec![asset(owner, "a/x.jpg", 1), asset(owner, "a/b/y.jpg", 1)];

        let children = direct_children_of(&DirectoryPath::new("a"), records).unwrap();
        assert_eq!(paths(&children), vec!["a/x.jpg"]);
    }

    #[test]
    fn test_record_named_like_the_directory_is_excluded() {
        let owner = Uuid::new_v4();
        let records = vec![
            asset(owner, "a", 1),
            asset(owner, "a/", 1),
            asset(owner, "a/x.jpg", 1),
        ];

        let children = direct_children_of(&DirectoryPath::new("a/"), records).unwrap();
        assert_eq!(paths(&children), vec!["a/x.jpg"]);
    }

    #[test]
    fn test_sibling_prefixes_do_not_match() {
        let owner = Uuid::new_v4();
        let records = vec![asset(owner, "ab/x.jpg", 1), asset(owner, "b/a/x.jpg", 1)];

        assert!(
            direct_children_of(&DirectoryPath::new("a"), records)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_ordered_by_file_name_then_input_order() {
        let owner = Uuid::new_v4();
        let first_b = asset(owner, "d/b.jpg", 1);
        let second_b = asset(owner, "d/b.jpg", 2);
        let (first_id, second_id) = (first_b.id, second_b.id);
        let records = vec![
            asset(owner, "d/c.jpg", 1),
            first_b,
            asset(owner, "d/B.jpg", 1),
            second_b,
            asset(owner, "d/a.jpg", 1),
        ];

        let children = direct_children_of(&DirectoryPath::new("d"), records).unwrap();
        assert_eq!(
            paths(&children),
            vec!["d/B.jpg", "d/a.jpg", "d/b.jpg", "d/b.jpg", "d/c.jpg"]
        );
        assert_eq!(children[2].id, first_id);
        assert_eq!(children[3].id, second_id);
    }

    #[test]
    fn test_no_result_has_more_than_one_extra_segment() {
        let owner = Uuid::new_v4();
        let dir = DirectoryPath::new("p/q");
        let records = vec![
            asset(owner, "p/q/1.jpg", 1),
            asset(owner, "p/q/r/2.jpg", 1),
            asset(owner, "p/q/r/s/3.jpg", 1),
            asset(owner, "p/q/4.jpg/", 1),
        ];

        let children = direct_children_of(&dir, records).unwrap();
        for child in &children {
            let rest = child
                .original_path
                .as_deref()
                .and_then(|p| normalize(p).strip_prefix("p/q/"))
                .unwrap();
            assert!(!rest.contains('/'));
        }
        assert_eq!(paths(&children), vec!["p/q/1.jpg", "p/q/4.jpg/"]);
    }

    #[test]
    fn test_root_children_are_absolute_top_level_paths() {
        let owner = Uuid::new_v4();
        let records = vec![
            asset(owner, "/top.jpg", 1),
            asset(owner, "/dir/nested.jpg", 1),
            asset(owner, "relative.jpg", 1),
        ];

        let children = direct_children_of(&DirectoryPath::root(), records).unwrap();
        assert_eq!(paths(&children), vec!["/top.jpg"]);
    }

    #[test]
    fn test_empty_path_is_malformed() {
        let owner = Uuid::new_v4();
        let err = direct_children_of(&DirectoryPath::new("a"), vec![asset(owner, "", 1)])
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedRecord);
    }
}
