//! Interactive prompts
//!
//! Commands that ask questions take a `&mut dyn Prompt` so the same logic
//! runs against a real terminal or a scripted list of answers.

use console::Term;
use owo_colors::OwoColorize;
use pwa_core::Result;
use std::collections::VecDeque;
use std::io::BufRead;

/// Source of answers to interactive questions
pub trait Prompt {
    /// Ask `question`. An empty answer yields `default`.
    fn ask(&mut self, question: &str, default: &str) -> Result<String>;
}

fn or_default(answer: &str, default: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Prompts on the controlling terminal, falling back to plain stdin lines
/// when input is piped
pub struct TerminalPrompt {
    term: Term,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompt {
    /// Prompt on stdout/stdin
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        self.term
            .write_str(&format!("{} {}: ", question.bold(), format!("({})", default).dimmed()))?;
        self.term.flush()?;

        let line = if self.term.is_term() {
            self.term.read_line()?
        } else {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            // Piped answers are not echoed by the terminal
            self.term.write_line("")?;
            line
        };

        Ok(or_default(&line, default))
    }
}

/// Answers questions from a fixed list, in order
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Queue answers; an empty string accepts the default
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        self.asked.push(question.to_string());
        let answer = self.answers.pop_front().unwrap_or_default();
        Ok(or_default(&answer, default))
    }
}
