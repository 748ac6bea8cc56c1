use anyhow::{anyhow, bail, Result};
use inquire::{Confirm, InquireError, Select, Text};
use owo_colors::OwoColorize;
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use crate::template::Template;

/// Raised when the user backs out of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl Display for Cancelled {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// One blocking question at a time. Aborting a prompt yields [`Cancelled`].
pub trait Prompter {
    /// Free text with a suggested default. An empty answer means the default.
    fn text(&mut self, message: &str, default: &str) -> Result<String>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Single choice; `options` is never empty and keeps its order.
    fn select<'t>(&mut self, message: &str, options: &'t [Template]) -> Result<&'t Template>;
}

/// Prompts on the terminal.
pub struct Interactive;

struct Choice<'t>(&'t Template);

impl Display for Choice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.0.display,
            self.0
                .description
                .if_supports_color(owo_colors::Stream::Stdout, |s| s.dimmed())
        )
    }
}

fn interrupted(err: InquireError) -> anyhow::Error {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => Cancelled.into(),
        err => anyhow!("Prompt failed: {err}"),
    }
}

impl Prompter for Interactive {
    fn text(&mut self, message: &str, default: &str) -> Result<String> {
        let answer = Text::new(message)
            .with_default(default)
            .prompt()
            .map_err(interrupted)?;

        Ok(if answer.is_empty() {
            default.to_owned()
        } else {
            answer
        })
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .map_err(interrupted)
    }

    fn select<'t>(&mut self, message: &str, options: &'t [Template]) -> Result<&'t Template> {
        let choices = options.iter().map(Choice).collect::<Vec<_>>();

        Select::new(message, choices)
            .prompt()
            .map(|choice| choice.0)
            .map_err(interrupted)
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    /// Accept whatever default the prompt offers.
    Default,
    Confirm(bool),
    /// Select the template with this key.
    Select(String),
    /// Abort the prompt, as Esc or Ctrl-C would.
    Cancel,
}

/// Replays prepared answers in order, recording every question asked.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct Scripted {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
}

impl Scripted {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Scripted {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, message: &str) -> Result<Answer> {
        self.asked.push(message.to_owned());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer for prompt `{message}`"))
    }
}

impl Prompter for Scripted {
    fn text(&mut self, message: &str, default: &str) -> Result<String> {
        match self.next(message)? {
            Answer::Text(text) if text.is_empty() => Ok(default.to_owned()),
            Answer::Text(text) => Ok(text),
            Answer::Default => Ok(default.to_owned()),
            Answer::Cancel => Err(Cancelled.into()),
            other => bail!("Expected a text answer for `{message}`, got {other:?}"),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            Answer::Default => Ok(default),
            Answer::Cancel => Err(Cancelled.into()),
            other => bail!("Expected a confirmation for `{message}`, got {other:?}"),
        }
    }

    fn select<'t>(&mut self, message: &str, options: &'t [Template]) -> Result<&'t Template> {
        match self.next(message)? {
            Answer::Select(key) => options
                .iter()
                .find(|t| t.key == key)
                .ok_or_else(|| anyhow!("`{key}` is not one of the options for `{message}`")),
            Answer::Default => options
                .first()
                .ok_or_else(|| anyhow!("No options for `{message}`")),
            Answer::Cancel => Err(Cancelled.into()),
            other => bail!("Expected a selection for `{message}`, got {other:?}"),
        }
    }
}
