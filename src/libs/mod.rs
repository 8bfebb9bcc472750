//! Core library modules for chorelog.
//!
//! ## Modules
//!
//! - **Scheduling core**: `recurrence` (due-date arithmetic), `status`
//!   (display classification), `task` (records), `manager` (lifecycle and rollover)
//! - **Inputs**: `config` (application settings), `seed` (declarative task list),
//!   `data_storage` (platform data directory)
//! - **Outputs**: `view` (task tables), `export` (completion log files),
//!   `calendar` (month grid), `messages` (user-facing text and macros)
//! - **Wiring**: `context` (per-invocation application context), `error`
//!
//! ## Usage
//!
//! ```rust
//! use chorelog::libs::status::{classify, Status};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let due = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
//! assert_eq!(classify(due, false, today), Status::Overdue { days: 5 });
//! ```

pub mod calendar;
pub mod config;
pub mod context;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod manager;
pub mod messages;
pub mod recurrence;
pub mod seed;
pub mod status;
pub mod task;
pub mod view;
