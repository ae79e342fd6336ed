//! Records of a flat task-service export.
//!
//! Relationships between records are expressed only through numeric ids
//! (`list_id`, `task_id`, folder `list_ids`). The shapes mirror the Wunderlist
//! export so a JSON dump deserializes straight into [`Export`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A folder grouping an ordered set of lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub list_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub list_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Calendar date in `YYYY-MM-DD` form; empty or missing means no due date.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Only meaningful when `completed` is set.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assignee_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub task_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An attachment whose payload lives behind `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    pub task_id: i64,
    pub list_id: i64,
    pub url: String,
    pub file_name: String,
    pub content_type: String,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub task_id: i64,
    /// When the reminder fires.
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: i64,
    pub task_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// The complete export, every collection in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Export {
    pub folders: Vec<Folder>,
    pub lists: Vec<List>,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub files: Vec<File>,
    pub reminders: Vec<Reminder>,
    pub subtasks: Vec<Subtask>,
}

impl Export {
    /// Reads an export previously dumped as JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
