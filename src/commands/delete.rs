//! Task deletion command.
//!
//! Deleting a task also removes its completion history. The command asks for
//! confirmation unless `--yes` is given; an unknown id only prints a notice.

use crate::{
    libs::{context::AppContext, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    #[arg(required = true)]
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(ctx: &mut AppContext, args: DeleteArgs) -> Result<()> {
    delete_task(ctx, args.id, args.yes)
}

pub fn delete_task(ctx: &mut AppContext, id: i64, skip_confirmation: bool) -> Result<()> {
    let name = match ctx.manager.task_name(id)? {
        Some(name) => name,
        None => {
            msg_info!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    if !skip_confirmation {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(id, name).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if ctx.manager.delete(id)? {
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_info!(Message::TaskNotFoundWithId(id));
    }
    Ok(())
}
