#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleMigration,
    ConfigLoadFailed(String), // error message

    // === EXPORT MESSAGES ===
    ExportReadFailed(String, String),  // path, error message
    ExportParseFailed(String, String), // path, error message
    ExportLoaded {
        folders: usize,
        lists: usize,
        tasks: usize,
    },

    // === CHECK MESSAGES ===
    CheckFoldersHeader,
    CheckOrphansHeader,
    CheckDanglingHeader,
    NoOrphanLists,
    NoDanglingReferences,
    DanglingReferencesFound(usize), // count

    // === MIGRATION MESSAGES ===
    MigrationStarted(String), // fallback namespace label
    MigrationCompleted {
        namespaces: usize,
        lists: usize,
        tasks: usize,
        attachments: usize,
        reminders: usize,
    },
    MigrationFailed(String), // error message
    MigrationCancelled,
    MigrationRetryHint,
    HierarchyWritten(String), // output path
    HierarchyWriteFailed(String, String), // path, error message
    HttpClientFailed(String), // error message

    // === PROMPTS ===
    PromptSourceName,
    PromptFallbackNamespace,
    PromptFetchConcurrency,
    PromptFetchTimeout,
}
