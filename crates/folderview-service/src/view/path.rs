//! Path normalization and segment arithmetic for virtual directories.
//!
//! Paths are opaque `/`-separated strings. Nothing here touches a real
//! filesystem or interprets platform separators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The only separator understood by the folder view.
pub const SEPARATOR: char = '/';

/// Strips every trailing `/` from `path`.
///
/// Idempotent: `normalize(normalize(p)) == normalize(p)`.
pub fn normalize(path: &str) -> &str {
    path.trim_end_matches(SEPARATOR)
}

/// Everything before the last `/` of `path`, normalized.
///
/// Returns the empty string (the root) when `path` contains no `/`. The
/// path itself is not normalized first, so `a/b/` has parent `a/b`.
pub fn parent_directory_of(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => normalize(&path[..idx]),
        None => "",
    }
}

/// 1-indexed `/`-field holding the immediate child name below
/// `normalized_parent`.
///
/// The number of separators in the parent, plus 2 for a non-empty parent
/// or 1 for the root. For the root the first field of a relative path is
/// its top-level folder.
pub fn level_for(normalized_parent: &str) -> usize {
    let separators = normalized_parent.matches(SEPARATOR).count();
    if normalized_parent.is_empty() {
        separators + 1
    } else {
        separators + 2
    }
}

/// The 1-indexed `/`-field at `level`, or `""` when the path has fewer
/// fields. Same contract as SQL `split_part`.
pub fn segment_at(path: &str, level: usize) -> &str {
    if level == 0 {
        return "";
    }
    path.split(SEPARATOR).nth(level - 1).unwrap_or("")
}

/// The text after the last `/` (the whole path if there is none).
pub fn last_segment(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or("")
}

/// A normalized virtual directory. The empty path is the root.
///
/// Equality is exact and case-sensitive on the normalized string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryPath(String);

impl DirectoryPath {
    /// Normalizes `raw` into a directory path.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw).to_string())
    }

    /// The root directory.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// The parent directory of an asset path.
    pub fn parent_of(asset_path: &str) -> Self {
        Self(parent_directory_of(asset_path).to_string())
    }

    /// The normalized path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the root directory.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Display name: the last segment, or `""` for the root.
    pub fn name(&self) -> &str {
        last_segment(&self.0)
    }

    /// Field index of the immediate child name, see [`level_for`].
    pub fn level(&self) -> usize {
        level_for(&self.0)
    }

    /// `self + "/"`, the prefix every direct member starts with.
    ///
    /// For the root this is `"/"`.
    pub fn member_prefix(&self) -> String {
        format!("{}{SEPARATOR}", self.0)
    }

    /// Whether `path` is this directory itself or lies anywhere below it.
    pub fn contains(&self, path: &str) -> bool {
        if self.is_root() {
            return true;
        }
        normalize(path) == self.0
            || path
                .strip_prefix(self.0.as_str())
                .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }

    /// Path of the child folder called `name`.
    pub fn child(&self, name: &str) -> Self {
        if self.is_root() {
            Self(name.to_string())
        } else {
            Self(format!("{}{SEPARATOR}{name}", self.0))
        }
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DirectoryPath> for String {
    fn from(dir: DirectoryPath) -> Self {
        dir.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_repeated_trailing_separators() {
        assert_eq!(normalize("a/b///"), "a/b");
        assert_eq!(normalize("a/b"), "a/b");
        assert_eq!(normalize("/"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for p in ["", "/", "a", "a/", "/a/b//", "a//b/", "///"] {
            let once = normalize(p);
            assert_eq!(normalize(once), once, "input {p:?}");
            assert!(!once.ends_with('/'), "input {p:?}");
        }
    }

    #[test]
    fn test_parent_directory_of() {
        assert_eq!(parent_directory_of("a/b/x.jpg"), "a/b");
        assert_eq!(parent_directory_of("/photos/a.jpg"), "/photos");
        assert_eq!(parent_directory_of("x.jpg"), "");
        assert_eq!(parent_directory_of("/x.jpg"), "");
        assert_eq!(parent_directory_of("a/b/"), "a/b");
        assert_eq!(parent_directory_of("a//x.jpg"), "a");
        assert_eq!(parent_directory_of(""), "");
    }

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(""), 1);
        assert_eq!(level_for("photos"), 2);
        assert_eq!(level_for("photos/2021"), 3);
        assert_eq!(level_for("/photos"), 3);
    }

    #[test]
    fn test_level_picks_immediate_child_name() {
        let cases = [
            ("", "photos/2021/a.jpg", "photos"),
            ("photos", "photos/2021/a.jpg", "2021"),
            ("photos/2021", "photos/2021/a.jpg", "a.jpg"),
            ("/photos", "/photos/2021/a.jpg", "2021"),
            ("", "/photos/a.jpg", ""),
            ("photos", "photos", ""),
        ];
        for (parent, path, expected) in cases {
            assert_eq!(
                segment_at(path, level_for(parent)),
                expected,
                "parent {parent:?} path {path:?}"
            );
        }
    }

    #[test]
    fn test_segment_at_out_of_range() {
        assert_eq!(segment_at("a/b", 3), "");
        assert_eq!(segment_at("a/b", 0), "");
        assert_eq!(segment_at("", 1), "");
    }

    #[test]
    fn test_directory_path_name_and_child() {
        let root = DirectoryPath::root();
        assert!(root.is_root());
        assert_eq!(root.name(), "");
        assert_eq!(root.child("photos").as_str(), "photos");
        assert_eq!(root.member_prefix(), "/");

        let dir = DirectoryPath::new("photos/2021/");
        assert_eq!(dir.as_str(), "photos/2021");
        assert_eq!(dir.name(), "2021");
        assert_eq!(dir.child("june").as_str(), "photos/2021/june");
        assert_eq!(dir.member_prefix(), "photos/2021/");
    }

    #[test]
    fn test_directory_contains() {
        let dir = DirectoryPath::new("photos");
        assert!(dir.contains("photos/a.jpg"));
        assert!(dir.contains("photos/2021/a.jpg"));
        assert!(dir.contains("photos"));
        assert!(dir.contains("photos/"));
        assert!(!dir.contains("photosets/a.jpg"));
        assert!(!dir.contains("other/photos/a.jpg"));
        assert!(DirectoryPath::root().contains("anything/at/all"));
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(DirectoryPath::new("Photos"), DirectoryPath::new("photos"));
        assert_eq!(DirectoryPath::new("photos/"), DirectoryPath::new("photos"));
    }
}
