#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TasksHeader(String), // date
    NoTasks,
    InvalidTasksFound(usize),
    TaskAdded { id: i64, name: String },
    TaskCompleted(i64),
    TaskAlreadyCompleted(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    DueDateIgnored(String), // recurrence
    ConfirmDeleteTask(i64, String), // id, name
    CompletionUndone(i64),          // task id
    NothingToUndo,
    CompletionLogHeader,
    CompletionLogEmpty,

    // === SEED MESSAGES ===
    SeedApplied(usize),               // added
    SeedEntrySkipped(String, String), // name, reason
    SeedStoreNotEmpty,
    SeedFileUnreadable(String), // error
    SeedFileEmpty(String),      // path

    // === EXPORT MESSAGES ===
    ExportCompleted(String, usize), // path, entries

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigWizardHeader,

    // === PROMPTS ===
    PromptTaskName,
    PromptRecurrence,
    PromptStartDate,
    PromptDueDate,
    PromptNotes,
    PromptComment,
    PromptTaskIdToDelete,
    PromptMenuChoice,
    MenuHelp,
    PromptDatabasePath,
    PromptSeedFile,
    PromptExportFormat,
    PromptExportPath,
    PromptUseColor,

    // === VALIDATION ===
    InvalidDateFormat,
    InvalidTaskId(String),
    InvalidChoice(String),
    TaskNameRequired,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseNewerThanApp(u32, u32), // database version, latest known
    MigrationHistory,
    NoMigrationsApplied,
}
