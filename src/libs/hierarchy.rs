//! The nested namespace → list → task model produced by a migration.

use super::task::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    /// Zero for the synthetic namespace holding orphan lists.
    pub created: i64,
    pub updated: i64,
    pub lists: Vec<List>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub title: String,
    pub created: i64,
    pub tasks: Vec<Task>,
}

/// Record counts of a migrated hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub namespaces: usize,
    pub lists: usize,
    pub tasks: usize,
    pub attachments: usize,
    pub reminders: usize,
}

impl Summary {
    pub fn of(namespaces: &[Namespace]) -> Self {
        let mut summary = Summary {
            namespaces: namespaces.len(),
            ..Default::default()
        };
        for list in namespaces.iter().flat_map(|ns| &ns.lists) {
            summary.lists += 1;
            summary.tasks += list.tasks.len();
            for task in &list.tasks {
                summary.attachments += task.attachments.len();
                summary.reminders += task.reminders.len();
            }
        }
        summary
    }
}
