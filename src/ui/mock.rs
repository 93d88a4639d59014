//! Scripted user input for testing

use super::input::{Result, UserInput, is_affirmative};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Line(String),
    Interrupt,
}

/// User input that replays predetermined answers
///
/// Once the script runs out every prompt behaves like closed input.
///
/// # Examples
///
/// ```
/// use toolfinder::ui::input::UserInput;
/// use toolfinder::ui::mock::ScriptedInput;
///
/// let input = ScriptedInput::new(["eq", "y"]).interrupt();
///
/// assert_eq!(input.prompt_text("Type").unwrap(), Some("eq".to_string()));
/// assert_eq!(input.prompt_confirm("Again?").unwrap(), Some(true));
/// assert_eq!(input.prompt_text("Type").unwrap(), None);
/// assert_eq!(input.prompts(), vec!["Type", "Again?", "Type"]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: Mutex<VecDeque<Answer>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInput {
    /// Create a script from lines of input
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().lines(lines)
    }

    /// Append more lines to the script
    #[must_use]
    pub fn lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(lines.into_iter().map(|l| Answer::Line(l.into())));
        self
    }

    /// Append a simulated Ctrl+C
    #[must_use]
    pub fn interrupt(self) -> Self {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Answer::Interrupt);
        self
    }

    /// Prompts shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of answers not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn next_answer(&self, prompt: &str) -> Option<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());

        match self
            .answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
        {
            Some(Answer::Line(line)) => Some(line),
            Some(Answer::Interrupt) | None => None,
        }
    }
}

impl UserInput for ScriptedInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        Ok(self.next_answer(prompt))
    }

    fn prompt_confirm(&self, prompt: &str) -> Result<Option<bool>> {
        Ok(self.next_answer(prompt).map(|answer| is_affirmative(&answer)))
    }
}
