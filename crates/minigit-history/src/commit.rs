//! Commit identifiers and commit nodes.

use crate::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use ulid::Ulid;

/// Unique identifier for a commit.
///
/// Ids follow the pattern `cmt_<ulid>`. ULIDs are time-ordered, so ids
/// assigned later sort after earlier ones, and they are never reused for
/// the lifetime of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a fresh commit id.
    pub(crate) fn generate() -> Self {
        Self(format!("cmt_{}", Ulid::new().to_string().to_lowercase()))
    }

    /// Create a commit id from a string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets the id-keyed commit arena be probed with user-supplied `&str`.
impl Borrow<str> for CommitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single immutable point in history.
///
/// Parent and child links are commit ids into the repository's arena,
/// never owning pointers, so the bidirectional tree has exactly one owner.
/// `children` is kept in commit order: committing on top of an older
/// commit appends a sibling branch rather than rewriting history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Unique identifier for this commit.
    pub id: CommitId,

    /// User-supplied commit message.
    pub message: String,

    /// When the commit was created.
    pub timestamp: DateTime<Utc>,

    /// Complete file set as of this commit.
    pub snapshot: Snapshot,

    /// Parent commit, or `None` for the root.
    pub parent: Option<CommitId>,

    /// Commits created with this commit as parent, in commit order.
    pub children: Vec<CommitId>,
}

impl Commit {
    /// Create a new commit with a fresh id and the current time.
    pub(crate) fn new(
        message: impl Into<String>,
        snapshot: Snapshot,
        parent: Option<CommitId>,
    ) -> Self {
        Self {
            id: CommitId::generate(),
            message: message.into(),
            timestamp: Utc::now(),
            snapshot,
            parent,
            children: Vec::new(),
        }
    }

    /// Whether this commit is the tree root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_have_prefix() {
        let id = CommitId::generate();
        assert!(id.as_str().starts_with("cmt_"));
        assert_eq!(id.as_str().len(), 30); // "cmt_" (4) + ULID (26)
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = CommitId::generate();
        let b = CommitId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_ascend_over_time() {
        let a = CommitId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = CommitId::generate();
        assert!(a < b, "later ids should sort after earlier ones");
    }

    #[test]
    fn test_borrow_str_matches_as_str() {
        let id = CommitId::from_string("cmt_test");
        let s: &str = std::borrow::Borrow::borrow(&id);
        assert_eq!(s, id.as_str());
    }

    #[test]
    fn test_new_commit_has_no_children() {
        let commit = Commit::new("msg", Snapshot::empty(), None);
        assert!(commit.children.is_empty());
        assert!(commit.is_root());
        assert_eq!(commit.message, "msg");
    }

    #[test]
    fn test_commit_with_parent_is_not_root() {
        let parent = CommitId::generate();
        let commit = Commit::new("msg", Snapshot::empty(), Some(parent.clone()));
        assert!(!commit.is_root());
        assert_eq!(commit.parent, Some(parent));
    }
}
