use crate::{
    libs::{context::AppContext, messages::Message},
    msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// ID of the task to complete
    #[arg(required = true)]
    id: i64,

    /// Comment stored with the completion
    #[arg(short, long, default_value = "")]
    comment: String,
}

pub fn cmd(ctx: &mut AppContext, args: CompleteArgs) -> Result<()> {
    complete_task(ctx, args.id, &args.comment)
}

/// Completes a task, reporting unknown ids instead of failing.
pub fn complete_task(ctx: &mut AppContext, id: i64, comment: &str) -> Result<()> {
    if !ctx.manager.exists(id)? {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    }

    let already_completed = ctx.manager.get_task(id).map(|task| task.completed).unwrap_or(false);
    ctx.manager.complete(id, comment.trim())?;

    if already_completed {
        msg_warning!(Message::TaskAlreadyCompleted(id));
    } else {
        msg_success!(Message::TaskCompleted(id));
    }
    Ok(())
}
