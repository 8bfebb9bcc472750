//! Display text for application messages.
//!
//! All user-facing wording lives in this one `match`, so a new `Message`
//! variant cannot be added without deciding its text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TasksHeader(date) => format!("Task list for {}", date),
            Message::NoTasks => "No tasks yet. Add one with `chorelog add` or list them in the seed file.".to_string(),
            Message::InvalidTasksFound(count) => format!("{} task(s) could not be read and are shown as invalid.", count),
            Message::TaskAdded { id, name } => format!("Task {} '{}' added.", id, name),
            Message::TaskCompleted(id) => format!("Task {} marked as complete.", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} was already completed; another completion was logged.", id),
            Message::TaskDeleted(id) => format!("Task {} deleted.", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::DueDateIgnored(recurrence) => format!("A {} task is first due on its start date; the given due date was ignored.", recurrence),
            Message::ConfirmDeleteTask(id, name) => format!("Delete task {} '{}' and its completion history?", id, name),
            Message::CompletionUndone(id) => format!("Last completion undone; task {} is open again.", id),
            Message::NothingToUndo => "Nothing to undo.".to_string(),
            Message::CompletionLogHeader => "Completion log".to_string(),
            Message::CompletionLogEmpty => "The completion log is empty.".to_string(),

            // === SEED MESSAGES ===
            Message::SeedApplied(count) => format!("Seeded {} task(s) from the task list.", count),
            Message::SeedEntrySkipped(name, reason) => format!("Skipped seed entry '{}': {}", name, reason),
            Message::SeedStoreNotEmpty => "Tasks already exist; seeding skipped (use --force to add the list anyway).".to_string(),
            Message::SeedFileUnreadable(error) => format!("Could not read the seed file: {}", error),
            Message::SeedFileEmpty(path) => format!("No tasks found in {}", path),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path, count) => format!("Exported {} completion(s) to {}", count, path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigWizardHeader => "Configure chorelog (press Enter to keep the current value)".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptRecurrence => "Recurrence".to_string(),
            Message::PromptStartDate => "Start date (YYYY-MM-DD, empty for today)".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD, empty for the start date)".to_string(),
            Message::PromptNotes => "Notes (optional)".to_string(),
            Message::PromptComment => "Add a comment (optional)".to_string(),
            Message::PromptTaskIdToDelete => "ID of the task to delete".to_string(),
            Message::PromptMenuChoice => "Your choice".to_string(),
            Message::MenuHelp => {
                "Enter a task ID to mark it complete, 'a' to add, 'd' to delete, 'u' to undo the last completion, 'e' to export the log, 'r' to refresh, 'q' to quit.".to_string()
            }
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptSeedFile => "Seed task list (TOML)".to_string(),
            Message::PromptExportFormat => "Default export format".to_string(),
            Message::PromptExportPath => "Default export file (empty for task_logs.<ext>)".to_string(),
            Message::PromptUseColor => "Use colors in task tables?".to_string(),

            // === VALIDATION ===
            Message::InvalidDateFormat => "Invalid date format. Please use YYYY-MM-DD.".to_string(),
            Message::InvalidTaskId(input) => format!("Invalid task ID '{}'. Please enter a number.", input),
            Message::InvalidChoice(input) => format!("Invalid input '{}'. Please try again.", input),
            Message::TaskNameRequired => "Task name cannot be empty.".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs update (it will be migrated on the next command)".to_string(),
            Message::DatabaseNewerThanApp(version, latest) => {
                format!("Database schema v{} is newer than this chorelog supports (v{}); please upgrade.", version, latest)
            }
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NoMigrationsApplied => "No migrations applied yet".to_string(),
        };
        write!(f, "{}", text)
    }
}
