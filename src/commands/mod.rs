//! Command-line interface.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and a
//! `cmd` function. All commands except `init` and `migrations` share one [`AppContext`],
//! created here before dispatch.

pub mod add;
pub mod calendar;
pub mod complete;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod migrations;
pub mod run;
pub mod seed;
pub mod undo;

use crate::libs::context::AppContext;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show tasks, rolling overdue recurring tasks forward")]
    List(list::ListArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Mark a task as complete")]
    Complete(complete::CompleteArgs),
    #[command(about = "Undo the most recent completion")]
    Undo,
    #[command(about = "Delete a task and its completion history")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export the completion log")]
    Export(export::ExportArgs),
    #[command(about = "Show the completion log")]
    Log,
    #[command(about = "Load tasks from the seed file")]
    Seed(seed::SeedArgs),
    #[command(about = "Show a month calendar with due dates")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Interactive task loop")]
    Run,
    #[command(about = "Database schema status and history")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        match Self::parse().command {
            Commands::Init(args) => init::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
            command => {
                let mut ctx = AppContext::load()?;
                dispatch(&mut ctx, command)
            }
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => init::cmd(args),
        Commands::List(args) => list::cmd(ctx, args),
        Commands::Add(args) => add::cmd(ctx, args),
        Commands::Complete(args) => complete::cmd(ctx, args),
        Commands::Undo => undo::cmd(ctx),
        Commands::Delete(args) => delete::cmd(ctx, args),
        Commands::Export(args) => export::cmd(ctx, args),
        Commands::Log => log::cmd(ctx),
        Commands::Seed(args) => seed::cmd(ctx, args),
        Commands::Calendar(args) => calendar::cmd(ctx, args),
        Commands::Run => run::cmd(ctx),
        Commands::Migrations(args) => migrations::cmd(args),
    }
}
