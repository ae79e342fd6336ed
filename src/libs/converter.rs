//! Conversion of a single source task into a migrated [`Task`].

use super::error::MigrationError;
use super::index::ReferenceIndex;
use super::source;
use super::task::{RelatedTask, RelationKind, Task};
use super::timestamp::{date_only_to_epoch, to_epoch, to_epoch_or_zero};
use crate::api::{AttachmentResolver, Fetch};
use futures::{stream, StreamExt, TryStreamExt};
use std::collections::BTreeMap;

/// Builds migrated tasks from source tasks and their indexed children.
///
/// Attachments of one task are downloaded up to `concurrency` at a time and
/// reassembled in source order.
pub struct TaskConverter<'r, F> {
    resolver: &'r AttachmentResolver<F>,
    concurrency: usize,
}

impl<'r, F: Fetch> TaskConverter<'r, F> {
    pub fn new(resolver: &'r AttachmentResolver<F>, concurrency: usize) -> Self {
        Self {
            resolver,
            concurrency: concurrency.max(1),
        }
    }

    /// Converts `task` using the children recorded for it in `index`.
    ///
    /// The description is the first note of the task; further notes are
    /// dropped. A completion time is only carried over for completed tasks.
    ///
    /// # Errors
    ///
    /// Fails with [`MigrationError::TimestampFormat`] on a malformed due date
    /// and with [`MigrationError::AttachmentFetch`] when any attachment of the
    /// task cannot be downloaded.
    pub async fn convert(&self, task: &source::Task, index: &ReferenceIndex<'_>) -> Result<Task, MigrationError> {
        let done_at = if task.completed {
            Some(to_epoch_or_zero(task.completed_at.as_ref()))
        } else {
            None
        };

        let due_date = match task.due_date.as_deref() {
            Some(date) if !date.is_empty() => Some(date_only_to_epoch(date)?),
            _ => None,
        };

        let description = index.notes_of(task.id).first().map(|note| note.content.clone()).unwrap_or_default();

        let attachments = stream::iter(index.files_of(task.id).iter().copied())
            .map(|file| self.resolver.resolve(file))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let reminders = index.reminders_of(task.id).iter().map(|reminder| to_epoch(&reminder.date)).collect();

        let mut related_tasks = BTreeMap::new();
        let subtasks = index.subtasks_of(task.id);
        if !subtasks.is_empty() {
            related_tasks.insert(
                RelationKind::Subtask,
                subtasks.iter().map(|sub| RelatedTask { text: sub.title.clone() }).collect(),
            );
        }

        Ok(Task {
            text: task.title.clone(),
            done: task.completed,
            done_at,
            due_date,
            created: to_epoch(&task.created_at),
            description,
            attachments,
            reminders,
            related_tasks,
        })
    }
}
