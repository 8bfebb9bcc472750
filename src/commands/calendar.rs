//! Month calendar command.
//!
//! Prints a Monday-first month grid with the due dates of open tasks marked
//! by `*` and today highlighted. The task list is refreshed first, so overdue
//! recurring tasks are rolled over exactly as `list` would.

use crate::libs::{calendar::Calendar, context::AppContext, manager::local_today};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
}

pub fn cmd(ctx: &mut AppContext, args: CalendarArgs) -> Result<()> {
    let today = local_today();
    let calendar = match args.month {
        Some(month) => Calendar::parse_month(&month)?,
        None => Calendar::containing(today),
    };

    let due_dates: Vec<_> = ctx
        .manager
        .get_tasks_on(today)?
        .iter()
        .filter_map(|entry| entry.as_valid())
        .filter(|classified| !classified.task.completed)
        .map(|classified| classified.task.due_date)
        .collect();

    println!("{}", calendar.mark(due_dates).styled(ctx.config.color).render(today));
    Ok(())
}
