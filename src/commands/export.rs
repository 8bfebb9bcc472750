//! Completion log export command.
//!
//! Writes every completion log entry, oldest first, to a CSV or JSON file.
//! Format and destination default to the configured values and can be
//! overridden per call.
//!
//! ## Formats
//!
//! - **CSV**: header `id,task_id,completion_date,comment`, one row per entry
//! - **JSON**: pretty-printed array of entry objects

use crate::{
    libs::{context::AppContext, export::ExportFormat, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format, defaults to the configured one
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Output file, defaults to `task_logs.<ext>` in the working directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(ctx: &mut AppContext, args: ExportArgs) -> Result<()> {
    export_log(ctx, args.format, args.output)
}

pub fn export_log(ctx: &AppContext, format: Option<ExportFormat>, output: Option<PathBuf>) -> Result<()> {
    let exporter = ctx.config.exporter(format, output);
    let count = ctx.manager.completion_log()?.len();
    let path = ctx.manager.export(&exporter)?;

    msg_success!(Message::ExportCompleted(path.display().to_string(), count));
    Ok(())
}
