//! # Chorelog - recurring task tracker
//!
//! A command-line utility that keeps recurring tasks on schedule, logs each
//! completion and exports the completion history.
//!
//! ## Features
//!
//! - **Recurrence**: one-time, daily, weekly and month-end-safe monthly tasks
//! - **Lazy Rollover**: overdue recurring tasks advance when the list is queried
//! - **Status Classification**: Overdue, Due Today, Upcoming, Pending, Completed
//! - **Completion Log**: append-only history with a global undo
//! - **Seeding**: initial task list from a declarative TOML file
//! - **Data Export**: completion log as CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chorelog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
