use crate::{
    libs::{context::AppContext, messages::Message, task::UndoOutcome},
    msg_info, msg_success,
};
use anyhow::Result;

/// Reverts the most recent completion across all tasks.
pub fn cmd(ctx: &mut AppContext) -> Result<()> {
    match ctx.manager.undo()? {
        UndoOutcome::Reverted { task_id } => msg_success!(Message::CompletionUndone(task_id)),
        UndoOutcome::NothingToUndo => msg_info!(Message::NothingToUndo),
    }
    Ok(())
}
