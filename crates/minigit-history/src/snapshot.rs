//! Immutable file snapshots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An immutable mapping from file path to file content as of one commit.
///
/// Every commit materializes its complete file set (no deltas), so the
/// content of any file at any commit is a single map lookup. A snapshot is
/// never mutated once the owning commit exists; derived snapshots are new
/// values built with [`Snapshot::layered`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    files: BTreeMap<String, String>,
}

impl Snapshot {
    /// Create an empty snapshot (the root commit's file set).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a new snapshot by layering staged edits over this one.
    ///
    /// Entries in `staged` overwrite inherited entries with the same path;
    /// everything else is carried over unchanged. `self` is not modified.
    pub fn layered(&self, staged: &BTreeMap<String, String>) -> Self {
        let mut files = self.files.clone();
        for (path, content) in staged {
            files.insert(path.clone(), content.clone());
        }
        Self { files }
    }

    /// Content of a single file, if present.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Whether the snapshot contains a file at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Number of files in the snapshot.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the snapshot holds no files at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over `(path, content)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }
}
