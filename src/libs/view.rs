use super::status::Status;
use super::task::{CompletionLogEntry, TaskEntry};
use prettytable::{format, row, Cell, Row, Table};

const NOT_AVAILABLE: &str = "N/A";

/// Renders task listings and the completion log as terminal tables.
#[derive(Debug, Clone, Copy)]
pub struct View {
    color: bool,
}

impl Default for View {
    fn default() -> Self {
        Self::new(true)
    }
}

impl View {
    pub fn new(color: bool) -> Self {
        View { color }
    }

    pub fn tasks(&self, entries: &[TaskEntry]) {
        self.tasks_table(entries).printstd();
    }

    pub fn tasks_table(&self, entries: &[TaskEntry]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["ID", "TASK", "RECURRENCE", "DUE DATE", "STATUS", "LAST COMPLETED", "NOTES"]);

        for entry in entries {
            let row = match entry {
                TaskEntry::Valid(classified) => {
                    let task = &classified.task;
                    Row::new(vec![
                        Cell::new(&task.id.to_string()).style_spec("r"),
                        Cell::new(&task.name),
                        Cell::new(task.recurrence.as_str()),
                        Cell::new(&task.due_date.to_string()),
                        self.status_cell(&classified.status),
                        Cell::new(&classified.last_completed.map(|d| d.to_string()).unwrap_or_else(|| NOT_AVAILABLE.to_string())),
                        Cell::new(&task.notes),
                    ])
                }
                TaskEntry::Invalid(invalid) => Row::new(vec![
                    Cell::new(&invalid.id.to_string()).style_spec("r"),
                    Cell::new(&invalid.name),
                    Cell::new("-"),
                    Cell::new("-"),
                    self.styled(format!("Invalid: {}", invalid.error), "Fm"),
                    Cell::new(NOT_AVAILABLE),
                    Cell::new(&invalid.notes),
                ]),
            };
            table.add_row(row);
        }

        table
    }

    fn status_cell(&self, status: &Status) -> Cell {
        let spec = match status {
            Status::Overdue { .. } => "Fr",
            Status::DueToday => "Fg",
            Status::Upcoming => "Fy",
            Status::Completed => "Fb",
            Status::Pending => "",
        };
        self.styled(status.to_string(), spec)
    }

    fn styled(&self, text: String, spec: &str) -> Cell {
        let cell = Cell::new(&text);
        if self.color && !spec.is_empty() {
            cell.style_spec(spec)
        } else {
            cell
        }
    }

    pub fn completion_log(&self, entries: &[CompletionLogEntry]) {
        self.completion_log_table(entries).printstd();
    }

    pub fn completion_log_table(&self, entries: &[CompletionLogEntry]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["LOG ID", "TASK ID", "COMPLETED ON", "COMMENT"]);

        for entry in entries {
            table.add_row(row![r->entry.id, r->entry.task_id, entry.completion_date, entry.comment]);
        }

        table
    }
}
