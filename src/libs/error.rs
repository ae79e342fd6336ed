//! Typed failures of the migration pipeline.
//!
//! Every stage returns these to its caller; nothing in the pipeline logs an
//! error and carries on. The command layer wraps them into `anyhow` for display.

use std::fmt;
use thiserror::Error;

/// Kind of record that holds a dangling id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A folder member id with no matching list.
    FolderList,
    /// A task whose list id matches no list.
    TaskList,
    /// A note whose task id matches no task.
    NoteTask,
    /// A file whose task id matches no task.
    FileTask,
    /// A reminder whose task id matches no task.
    ReminderTask,
    /// A subtask whose parent task id matches no task.
    SubtaskTask,
}

/// A reference from one source record to an id that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub kind: ReferenceKind,
    /// Id of the record holding the reference.
    pub owner_id: i64,
    /// The id that could not be resolved.
    pub missing_id: i64,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (owner, target) = match self.kind {
            ReferenceKind::FolderList => ("folder", "list"),
            ReferenceKind::TaskList => ("task", "list"),
            ReferenceKind::NoteTask => ("note", "task"),
            ReferenceKind::FileTask => ("file", "task"),
            ReferenceKind::ReminderTask => ("reminder", "task"),
            ReferenceKind::SubtaskTask => ("subtask", "task"),
        };
        write!(f, "{} {} references missing {} {}", owner, self.owner_id, target, self.missing_id)
    }
}

/// Failure while retrieving an attachment payload.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport level failure (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Errors produced while converting an export into a namespace hierarchy.
#[derive(Error, Debug)]
pub enum MigrationError {
    /// A date or timestamp string could not be parsed.
    #[error("malformed timestamp {value:?}: {source}")]
    TimestampFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// An attachment payload could not be downloaded.
    #[error("failed to fetch attachment from {url}: {source}")]
    AttachmentFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A record points at an id absent from the export.
    #[error("missing reference: {0}")]
    MissingReference(DanglingReference),

    /// The caller aborted the migration before it finished.
    #[error("migration cancelled")]
    Cancelled,
}

impl MigrationError {
    pub fn timestamp_format(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::TimestampFormat {
            value: value.into(),
            source,
        }
    }

    pub fn attachment_fetch(url: impl Into<String>, source: FetchError) -> Self {
        Self::AttachmentFetch { url: url.into(), source }
    }

    /// Whether re-running the same migration may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::AttachmentFetch { .. } | Self::Cancelled)
    }
}
