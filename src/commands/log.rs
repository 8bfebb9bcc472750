use crate::{
    libs::{context::AppContext, messages::Message},
    msg_info, msg_print,
};
use anyhow::Result;

/// Prints the completion log, oldest entry first.
pub fn cmd(ctx: &mut AppContext) -> Result<()> {
    let entries = ctx.manager.completion_log()?;
    if entries.is_empty() {
        msg_info!(Message::CompletionLogEmpty);
        return Ok(());
    }

    msg_print!(Message::CompletionLogHeader, true);
    ctx.view.completion_log(&entries);
    Ok(())
}
