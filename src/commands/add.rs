//! Task creation command.
//!
//! Tasks can be given entirely on the command line or, when no name is
//! passed, entered through interactive prompts. The start date defaults to
//! today and the due date to the start date.

use crate::{
    libs::{
        context::AppContext,
        error::parse_date,
        messages::Message,
        recurrence::Recurrence,
        task::NewTask,
    },
    msg_bail_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name; prompts for every field when omitted
    name: Option<String>,

    /// How often the task repeats
    #[arg(short, long, value_enum, default_value = "one-time")]
    recurrence: Recurrence,

    /// Start date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    start: Option<String>,

    /// Due date (YYYY-MM-DD), defaults to the start date
    #[arg(short, long)]
    due: Option<String>,

    /// Free-form notes
    #[arg(short, long)]
    notes: Option<String>,
}

pub fn cmd(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let new_task = match args.name {
        Some(name) => {
            if name.trim().is_empty() {
                msg_bail_anyhow!(Message::TaskNameRequired);
            }
            NewTask {
                id: None,
                name,
                recurrence: args.recurrence,
                start_date: args.start.as_deref().map(|value| parse_date("start_date", value)).transpose()?,
                due_date: args.due.as_deref().map(|value| parse_date("due_date", value)).transpose()?,
                notes: args.notes,
            }
        }
        None => prompt_new_task()?,
    };

    if new_task.ignores_due_date() {
        msg_warning!(Message::DueDateIgnored(new_task.recurrence.to_string()));
    }

    let task = ctx.manager.add(new_task)?;
    msg_success!(Message::TaskAdded { id: task.id, name: task.name });
    Ok(())
}

/// Collects a new task through interactive prompts.
pub fn prompt_new_task() -> Result<NewTask> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .validate_with(move |input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::TaskNameRequired.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptRecurrence.to_string())
        .items(&Recurrence::ALL.iter().map(|r| r.as_str()).collect::<Vec<_>>())
        .default(0)
        .interact()?;
    let recurrence = Recurrence::ALL[selected];

    let start_date = prompt_optional_date(Message::PromptStartDate, "start_date")?;
    let due_date = prompt_optional_date(Message::PromptDueDate, "due_date")?;

    let notes: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNotes.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(NewTask {
        id: None,
        name,
        recurrence,
        start_date,
        due_date,
        notes: Some(notes).filter(|notes| !notes.trim().is_empty()),
    })
}

fn prompt_optional_date(prompt: Message, field: &'static str) -> Result<Option<NaiveDate>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .validate_with(move |input: &String| -> Result<(), String> {
            if input.trim().is_empty() || parse_date(field, input).is_ok() {
                Ok(())
            } else {
                Err(Message::InvalidDateFormat.to_string())
            }
        })
        .interact_text()?;

    if value.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_date(field, &value)?))
}
