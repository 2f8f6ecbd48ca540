//! In-memory commit history for minigit.
//!
//! This crate provides the version-control core:
//! - Stage file edits and capture them as immutable commits
//! - Branch implicitly by committing on top of an older commit
//! - Move HEAD to any commit and inspect its full file set
//! - Walk the whole history as an indented tree
//!
//! All state lives in a single [`Repository`] value owned by the caller;
//! nothing is persisted and nothing is global, so independent histories
//! can coexist in one process.
//!
//! # Example
//!
//! ```
//! use minigit_history::Repository;
//!
//! let mut repo = Repository::new();
//! repo.stage("notes.txt", "hello");
//! let first = repo.commit("first commit")?;
//!
//! repo.stage("notes.txt", "hello world");
//! repo.commit("update notes")?;
//!
//! // Restore the earlier state
//! repo.checkout(first.as_str())?;
//! assert_eq!(repo.current_files()?.get("notes.txt"), Some("hello"));
//! # Ok::<(), minigit_history::HistoryError>(())
//! ```

mod commit;
mod error;
mod repo;
mod snapshot;

pub use commit::{Commit, CommitId};
pub use error::{HistoryError, HistoryResult};
pub use repo::{LogEntry, Repository};
pub use snapshot::Snapshot;
