//! Display implementation for taskmig messages.
//!
//! All user-facing text lives here so commands only pick a [`Message`]
//! variant and hand it to one of the `msg_*!` macros.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleMigration => "Migration settings".to_string(),
            Message::ConfigLoadFailed(err) => format!("Failed to load configuration: {}", err),

            // === EXPORT MESSAGES ===
            Message::ExportReadFailed(path, err) => format!("Failed to read export {}: {}", path, err),
            Message::ExportParseFailed(path, err) => format!("Export {} is not a valid dump: {}", path, err),
            Message::ExportLoaded { folders, lists, tasks } => {
                format!("Loaded export: {} folders, {} lists, {} tasks", folders, lists, tasks)
            }

            // === CHECK MESSAGES ===
            Message::CheckFoldersHeader => "Folders".to_string(),
            Message::CheckOrphansHeader => "Lists without a folder".to_string(),
            Message::CheckDanglingHeader => "Dangling references".to_string(),
            Message::NoOrphanLists => "Every list belongs to a folder".to_string(),
            Message::NoDanglingReferences => "All references resolve".to_string(),
            Message::DanglingReferencesFound(count) => {
                format!("{} dangling reference(s) found; conversion would fail", count)
            }

            // === MIGRATION MESSAGES ===
            Message::MigrationStarted(label) => format!("Converting export (orphan lists go to '{}')", label),
            Message::MigrationCompleted {
                namespaces,
                lists,
                tasks,
                attachments,
                reminders,
            } => format!(
                "Converted {} namespaces, {} lists, {} tasks, {} attachments, {} reminders",
                namespaces, lists, tasks, attachments, reminders
            ),
            Message::MigrationFailed(err) => format!("Migration failed: {}", err),
            Message::MigrationCancelled => "Migration cancelled, nothing was written".to_string(),
            Message::MigrationRetryHint => "The export was not modified; re-run the command to retry".to_string(),
            Message::HierarchyWritten(path) => format!("Hierarchy written to {}", path),
            Message::HierarchyWriteFailed(path, err) => format!("Failed to write {}: {}", path, err),
            Message::HttpClientFailed(err) => format!("Failed to set up HTTP client: {}", err),

            // === PROMPTS ===
            Message::PromptSourceName => "Name of the source service".to_string(),
            Message::PromptFallbackNamespace => "Namespace for lists without a folder".to_string(),
            Message::PromptFetchConcurrency => "Concurrent attachment downloads".to_string(),
            Message::PromptFetchTimeout => "Download timeout in seconds (0 = none)".to_string(),
        };
        write!(f, "{}", s)
    }
}
