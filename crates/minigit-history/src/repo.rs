//! The repository: staging area, commit arena, and HEAD.

use crate::{Commit, CommitId, HistoryError, HistoryResult, Snapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// One row of the history log: a commit plus its depth in the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Commit id.
    pub id: CommitId,

    /// Commit message.
    pub message: String,

    /// When the commit was created.
    pub timestamp: DateTime<Utc>,

    /// Distance from the root commit.
    pub depth: usize,
}

impl LogEntry {
    /// Render the entry as a single log line, without indentation.
    pub fn render(&self) -> String {
        format!(
            "- {} : {} @ {}",
            self.id,
            self.message,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// An in-memory version history.
///
/// The repository is the sole owner of all commits: parent/child links and
/// HEAD are ids into the `commits` arena, never independent ownership. It
/// holds the staging area of pending edits, the commit tree, and the HEAD
/// pointer, and moves between two states: Empty (no commit yet) and
/// Active (HEAD set). No operation is fatal; failures return an error and
/// leave the repository unchanged.
#[derive(Debug, Default)]
pub struct Repository {
    /// Pending edits, consumed and cleared by the next successful commit.
    staging: BTreeMap<String, String>,

    /// All commits ever created, keyed by id.
    commits: HashMap<CommitId, Commit>,

    /// The currently checked-out commit. `None` until the first commit.
    head: Option<CommitId>,
}

impl Repository {
    /// Create an empty repository with no commits and nothing staged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a file edit, inserting or overwriting the entry for `path`.
    ///
    /// Paths and contents are taken as-is; no validation is performed and
    /// staging always succeeds.
    pub fn stage(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        debug!("Staged '{}'", path);
        self.staging.insert(path, content.into());
    }

    /// The pending, uncommitted edits in path order.
    pub fn staged(&self) -> &BTreeMap<String, String> {
        &self.staging
    }

    /// Capture the staged edits as a new commit and move HEAD to it.
    ///
    /// The new snapshot is the current HEAD's snapshot with every staged
    /// entry layered on top, so each commit materializes the complete file
    /// set. Committing with an empty staging area is rejected once history
    /// has started; the very first commit is always allowed and becomes
    /// the (possibly empty) root. Committing while HEAD points at an older
    /// commit appends a sibling branch; the previous subtree stays intact.
    pub fn commit(&mut self, message: impl Into<String>) -> HistoryResult<CommitId> {
        if self.staging.is_empty() && self.head.is_some() {
            debug!("Commit rejected: staging area is empty");
            return Err(HistoryError::NothingToCommit);
        }

        let base = match self.head() {
            Some(head) => head.snapshot.clone(),
            None => Snapshot::empty(),
        };
        let snapshot = base.layered(&self.staging);

        let commit = Commit::new(message, snapshot, self.head.clone());
        let id = commit.id.clone();

        if let Some(head_id) = self.head.clone() {
            if let Some(head) = self.commits.get_mut(&head_id) {
                head.children.push(id.clone());
            }
        }

        info!("Created commit {} ({} files)", id, commit.snapshot.len());
        self.commits.insert(id.clone(), commit);
        self.head = Some(id.clone());
        self.staging.clear();

        Ok(id)
    }

    /// Move HEAD to the commit with the given id.
    ///
    /// No snapshot is copied and the staging area is deliberately left
    /// untouched: staged-but-uncommitted edits survive a checkout. An
    /// unknown id fails with [`HistoryError::CommitNotFound`] and leaves
    /// HEAD where it was.
    pub fn checkout(&mut self, id: &str) -> HistoryResult<&Commit> {
        let target = match self.commits.get(id) {
            Some(commit) => commit.id.clone(),
            None => return Err(HistoryError::commit_not_found(id)),
        };

        info!("Checked out {}", target);
        self.head = Some(target.clone());
        self.commits
            .get(&target)
            .ok_or_else(|| HistoryError::commit_not_found(id))
    }

    /// Walk the whole history as an indented tree.
    ///
    /// Follows parent links from HEAD up to the root, then visits every
    /// commit in pre-order with children in commit order, so all branches
    /// are shown, not just the path to HEAD.
    pub fn log(&self) -> HistoryResult<Vec<LogEntry>> {
        let head = self.head.clone().ok_or(HistoryError::EmptyHistory)?;

        let mut root = head;
        while let Some(parent) = self.commits.get(&root).and_then(|c| c.parent.clone()) {
            root = parent;
        }

        let mut entries = Vec::with_capacity(self.commits.len());
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            if let Some(commit) = self.commits.get(&id) {
                entries.push(LogEntry {
                    id: commit.id.clone(),
                    message: commit.message.clone(),
                    timestamp: commit.timestamp,
                    depth,
                });
                for child in commit.children.iter().rev() {
                    stack.push((child.clone(), depth + 1));
                }
            }
        }

        Ok(entries)
    }

    /// The full file set at HEAD.
    pub fn current_files(&self) -> HistoryResult<&Snapshot> {
        self.head()
            .map(|commit| &commit.snapshot)
            .ok_or(HistoryError::EmptyHistory)
    }

    /// The commit HEAD points at, if any commit exists.
    pub fn head(&self) -> Option<&Commit> {
        self.head.as_ref().and_then(|id| self.commits.get(id))
    }

    /// Look up a commit by id.
    pub fn get(&self, id: &str) -> Option<&Commit> {
        self.commits.get(id)
    }

    /// Total number of commits ever created.
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Whether no commit exists yet.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
