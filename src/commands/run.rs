//! Interactive task loop.
//!
//! Shows the refreshed task table, then reads one command per round:
//!
//! - a task ID marks that task complete, prompting for a comment
//! - `a` adds a task, `d` deletes one, `u` undoes the last completion
//! - `e` exports the completion log, `r` refreshes, `q` quits
//!
//! A failing action is reported and the loop carries on.

use super::{add, complete, delete, export, list, undo};
use crate::{
    libs::{context::AppContext, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

enum Choice {
    Complete(i64),
    Add,
    Delete,
    Undo,
    Export,
    Refresh,
    Quit,
}

impl Choice {
    fn parse(input: &str) -> Option<Choice> {
        let input = input.trim();
        if let Ok(id) = input.parse::<i64>() {
            return Some(Choice::Complete(id));
        }
        match input.to_lowercase().as_str() {
            "a" => Some(Choice::Add),
            "d" => Some(Choice::Delete),
            "u" => Some(Choice::Undo),
            "e" => Some(Choice::Export),
            "r" | "" => Some(Choice::Refresh),
            "q" => Some(Choice::Quit),
            _ => None,
        }
    }
}

pub fn cmd(ctx: &mut AppContext) -> Result<()> {
    loop {
        if let Err(e) = list::show(ctx, false) {
            msg_error!(e);
        }
        msg_info!(Message::MenuHelp);

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .allow_empty(true)
            .interact_text()?;

        let choice = match Choice::parse(&input) {
            Some(choice) => choice,
            None => {
                msg_error!(Message::InvalidChoice(input.trim().to_string()));
                continue;
            }
        };

        let outcome = match choice {
            Choice::Quit => return Ok(()),
            Choice::Refresh => Ok(()),
            Choice::Complete(id) => prompt_comment().and_then(|comment| complete::complete_task(ctx, id, &comment)),
            Choice::Add => add::prompt_new_task().and_then(|new_task| {
                let task = ctx.manager.add(new_task)?;
                msg_success!(Message::TaskAdded { id: task.id, name: task.name });
                Ok(())
            }),
            Choice::Delete => prompt_task_id().and_then(|id| match id {
                Some(id) => delete::delete_task(ctx, id, false),
                None => Ok(()),
            }),
            Choice::Undo => undo::cmd(ctx),
            Choice::Export => export::export_log(ctx, None, None),
        };

        if let Err(e) = outcome {
            msg_error!(e);
        }
    }
}

fn prompt_comment() -> Result<String> {
    let comment: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptComment.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(comment)
}

fn prompt_task_id() -> Result<Option<i64>> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskIdToDelete.to_string())
        .interact_text()?;

    match input.trim().parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            msg_error!(Message::InvalidTaskId(input.trim().to_string()));
            Ok(None)
        }
    }
}
