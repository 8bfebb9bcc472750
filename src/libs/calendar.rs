//! Month calendar for the terminal.
//!
//! Monday-first grid with a centered "Month YYYY" header. Each day occupies
//! three columns: two for the number and one that is a space, or `*` when a
//! task is due that day. Today is shown in reverse video when styling is on.

use super::error::TaskError;
use super::recurrence::days_in_month;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

const WIDTH: usize = 20;
const DAY_NAMES: &str = "Mo Tu We Th Fr Sa Su";
const BOLD: &str = "\x1b[1m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

pub struct Calendar {
    year: i32,
    month: u32,
    marked: BTreeSet<NaiveDate>,
    styled: bool,
}

impl Calendar {
    pub fn new(year: i32, month: u32) -> Result<Self, TaskError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(TaskError::InvalidDate {
                field: "month",
                value: format!("{:04}-{:02}", year, month),
            });
        }

        Ok(Calendar {
            year,
            month,
            marked: BTreeSet::new(),
            styled: true,
        })
    }

    /// Parses `YYYY-MM`.
    pub fn parse_month(value: &str) -> Result<Self, TaskError> {
        let invalid = || TaskError::InvalidDate {
            field: "month",
            value: value.to_string(),
        };
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Calendar {
            year: date.year(),
            month: date.month(),
            marked: BTreeSet::new(),
            styled: true,
        }
    }

    /// Marks due dates; dates outside this month are ignored.
    pub fn mark<I: IntoIterator<Item = NaiveDate>>(mut self, dates: I) -> Self {
        let (year, month) = (self.year, self.month);
        self.marked.extend(dates.into_iter().filter(|d| d.year() == year && d.month() == month));
        self
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn render(&self, today: NaiveDate) -> String {
        let first = self.first_day();
        let header = format!("{} {}", first.format("%B"), self.year);

        let mut out = String::new();
        out.push_str(&self.bold(&format!("{:^width$}", header, width = WIDTH)));
        out.push('\n');
        out.push_str(&self.bold(DAY_NAMES));
        out.push('\n');

        let offset = first.weekday().num_days_from_monday() as usize;
        let mut line = "   ".repeat(offset);
        let mut column = offset;
        let last_day = days_in_month(self.year, self.month).unwrap_or(28);

        for day in 1..=last_day {
            let date = first.with_day(day).unwrap_or(first);
            let number = format!("{:2}", day);
            if self.styled && date == today {
                line.push_str(&format!("{}{}{}", REVERSE, number, RESET));
            } else {
                line.push_str(&number);
            }
            line.push(if self.marked.contains(&date) { '*' } else { ' ' });

            column += 1;
            if column == 7 {
                out.push_str(line.trim_end());
                out.push('\n');
                line.clear();
                column = 0;
            }
        }
        if !line.is_empty() {
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }

    fn bold(&self, text: &str) -> String {
        if self.styled {
            format!("{}{}{}", BOLD, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Month grid for `year`-`month` with `due_dates` marked.
pub fn render_month<I>(year: i32, month: u32, today: NaiveDate, due_dates: I, styled: bool) -> Result<String, TaskError>
where
    I: IntoIterator<Item = NaiveDate>,
{
    Ok(Calendar::new(year, month)?.mark(due_dates).styled(styled).render(today))
}
