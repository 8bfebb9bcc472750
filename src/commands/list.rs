//! Task listing command.
//!
//! Listing is what drives the schedule: every overdue recurring task is
//! advanced by one occurrence before the table is printed. Rows that could
//! not be read are still shown, marked as invalid.

use crate::{
    libs::{context::AppContext, manager::local_today, messages::Message, status::Status, task::TaskEntry},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Hide completed tasks
    #[arg(short, long)]
    open: bool,
}

pub fn cmd(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    show(ctx, args.open)
}

/// Refreshes and prints the task table.
pub fn show(ctx: &mut AppContext, open_only: bool) -> Result<()> {
    let today = local_today();
    let mut entries = ctx.manager.get_tasks_on(today)?;

    if entries.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    if open_only {
        entries.retain(|entry| !matches!(entry, TaskEntry::Valid(classified) if classified.status == Status::Completed));
    }

    msg_print!(Message::TasksHeader(today.format("%Y-%m-%d").to_string()), true);
    ctx.view.tasks(&entries);

    let invalid = entries.iter().filter(|entry| matches!(entry, TaskEntry::Invalid(_))).count();
    if invalid > 0 {
        msg_warning!(Message::InvalidTasksFound(invalid));
    }

    Ok(())
}
