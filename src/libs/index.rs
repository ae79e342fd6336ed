//! Lookup tables from owner ids to their child records.
//!
//! The export only links records by id. [`ReferenceIndex`] groups every child
//! under its owner once, keeping source order, so conversion never scans the
//! flat vectors again. The index borrows the export and is never mutated after
//! [`ReferenceIndex::build`].

use super::error::{DanglingReference, ReferenceKind};
use super::source::{Export, File, List, Note, Reminder, Subtask, Task};
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
pub struct ReferenceIndex<'a> {
    lists: HashMap<i64, &'a List>,
    tasks_by_list: HashMap<i64, Vec<&'a Task>>,
    notes_by_task: HashMap<i64, Vec<&'a Note>>,
    files_by_task: HashMap<i64, Vec<&'a File>>,
    reminders_by_task: HashMap<i64, Vec<&'a Reminder>>,
    subtasks_by_task: HashMap<i64, Vec<&'a Subtask>>,
}

fn group_by<'a, T>(records: &'a [T], owner: impl Fn(&T) -> i64) -> HashMap<i64, Vec<&'a T>> {
    let mut grouped: HashMap<i64, Vec<&'a T>> = HashMap::new();
    for record in records {
        grouped.entry(owner(record)).or_default().push(record);
    }
    grouped
}

fn children<'m, 'a, T>(map: &'m HashMap<i64, Vec<&'a T>>, owner: i64) -> &'m [&'a T] {
    map.get(&owner).map(Vec::as_slice).unwrap_or(&[])
}

impl<'a> ReferenceIndex<'a> {
    pub fn build(export: &'a Export) -> Self {
        Self {
            lists: export.lists.iter().map(|list| (list.id, list)).collect(),
            tasks_by_list: group_by(&export.tasks, |t| t.list_id),
            notes_by_task: group_by(&export.notes, |n| n.task_id),
            files_by_task: group_by(&export.files, |f| f.task_id),
            reminders_by_task: group_by(&export.reminders, |r| r.task_id),
            subtasks_by_task: group_by(&export.subtasks, |s| s.task_id),
        }
    }

    pub fn list(&self, id: i64) -> Option<&'a List> {
        self.lists.get(&id).copied()
    }

    pub fn tasks_of(&self, list_id: i64) -> &[&'a Task] {
        children(&self.tasks_by_list, list_id)
    }

    pub fn notes_of(&self, task_id: i64) -> &[&'a Note] {
        children(&self.notes_by_task, task_id)
    }

    pub fn files_of(&self, task_id: i64) -> &[&'a File] {
        children(&self.files_by_task, task_id)
    }

    pub fn reminders_of(&self, task_id: i64) -> &[&'a Reminder] {
        children(&self.reminders_by_task, task_id)
    }

    pub fn subtasks_of(&self, task_id: i64) -> &[&'a Subtask] {
        children(&self.subtasks_by_task, task_id)
    }

    /// Every id reference in `export` that points at nothing, in source order:
    /// folder members first, then tasks, notes, files, reminders and subtasks.
    pub fn dangling_references(export: &Export) -> Vec<DanglingReference> {
        let list_ids: HashSet<i64> = export.lists.iter().map(|l| l.id).collect();
        let task_ids: HashSet<i64> = export.tasks.iter().map(|t| t.id).collect();
        let mut dangling = Vec::new();

        for folder in &export.folders {
            for &list_id in &folder.list_ids {
                if !list_ids.contains(&list_id) {
                    dangling.push(DanglingReference {
                        kind: ReferenceKind::FolderList,
                        owner_id: folder.id,
                        missing_id: list_id,
                    });
                }
            }
        }

        for task in &export.tasks {
            if !list_ids.contains(&task.list_id) {
                dangling.push(DanglingReference {
                    kind: ReferenceKind::TaskList,
                    owner_id: task.id,
                    missing_id: task.list_id,
                });
            }
        }

        let mut check_task = |kind, owner_id, task_id| {
            if !task_ids.contains(&task_id) {
                dangling.push(DanglingReference {
                    kind,
                    owner_id,
                    missing_id: task_id,
                });
            }
        };
        for note in &export.notes {
            check_task(ReferenceKind::NoteTask, note.id, note.task_id);
        }
        for file in &export.files {
            check_task(ReferenceKind::FileTask, file.id, file.task_id);
        }
        for reminder in &export.reminders {
            check_task(ReferenceKind::ReminderTask, reminder.id, reminder.task_id);
        }
        for subtask in &export.subtasks {
            check_task(ReferenceKind::SubtaskTask, subtask.id, subtask.task_id);
        }

        dangling
    }

    /// Lists not named by any folder, in source order.
    pub fn orphan_lists(export: &Export) -> Vec<&List> {
        let claimed: HashSet<i64> = export.folders.iter().flat_map(|f| f.list_ids.iter().copied()).collect();
        export.lists.iter().filter(|list| !claimed.contains(&list.id)).collect()
    }
}
