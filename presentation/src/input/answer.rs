//! Answer input for the walk and resume commands
//!
//! Answers are written as:
//!
//! - `2` or `2,3`: selected option ids
//! - `text:<free text>`: a free-text answer
//! - `-` or an empty line: no answer

use crate::output::console::ConsoleFormatter;
use navigator_domain::{Answer, OptionId, QuestionNode};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors raised while reading or parsing an answer
#[derive(Error, Debug)]
pub enum AnswerParseError {
    #[error("'{0}' is not an option id (expected a number, `text:...` or `-`)")]
    InvalidOption(String),

    #[error("Cannot read answer: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one answer written on the command line or at the prompt
pub fn parse_answer(input: &str) -> Result<Answer, AnswerParseError> {
    let input = input.trim();
    if input.is_empty() || input == "-" {
        return Ok(Answer::empty());
    }
    if let Some(text) = input.strip_prefix("text:") {
        return Ok(Answer::text(text.trim()));
    }

    let options = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map(OptionId::new)
                .map_err(|_| AnswerParseError::InvalidOption(part.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Answer::choices(options))
}

/// Supplies answers to presented questions
pub trait AnswerSource {
    /// Answer for `question`, `None` when no more answers are available
    fn next_answer(
        &mut self,
        question: &QuestionNode,
    ) -> Result<Option<Answer>, AnswerParseError>;
}

/// Answers given up front with `--answer`
pub struct ScriptedAnswers {
    answers: std::vec::IntoIter<String>,
}

impl ScriptedAnswers {
    pub fn new(answers: Vec<String>) -> Self {
        Self {
            answers: answers.into_iter(),
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(
        &mut self,
        _question: &QuestionNode,
    ) -> Result<Option<Answer>, AnswerParseError> {
        self.answers.next().map(|a| parse_answer(&a)).transpose()
    }
}

/// Answers read line by line from a prompt
pub struct PromptAnswers<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptAnswers<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> AnswerSource for PromptAnswers<R, W> {
    fn next_answer(
        &mut self,
        question: &QuestionNode,
    ) -> Result<Option<Answer>, AnswerParseError> {
        loop {
            let _ = write!(self.output, "{}", ConsoleFormatter::format_prompt(question));
            let _ = self.output.flush();

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_answer(&line) {
                Ok(answer) => return Ok(Some(answer)),
                Err(e) => {
                    let _ = writeln!(self.output, "{}", e);
                }
            }
        }
    }
}
