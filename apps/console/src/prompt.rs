//! # Line Input
//!
//! Every question the console asks goes through [`Prompt`], so a session can
//! run against a real terminal or a scripted list of answers.
//!
//! ```text
//! ┌───────────────────────────┐        ┌───────────────────────────────┐
//! │  TermPrompt               │        │  ScriptedPrompt               │
//! │  • tty: dialoguer Input   │        │  • queue of canned lines      │
//! │  • else: plain stdin line │        │  • records every prompt asked │
//! └─────────────┬─────────────┘        └───────────────┬───────────────┘
//!               └──────────────► Prompt ◄──────────────┘
//!                                   │
//!                          commands / session
//! ```
//!
//! End of input surfaces as `io::ErrorKind::UnexpectedEof`.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::Input;

/// Source of operator answers.
pub trait Prompt {
    /// Shows `prompt` and returns the line the operator typed, without the
    /// trailing newline. Leading/trailing spaces are left for the validators.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

// =============================================================================
// Terminal
// =============================================================================

/// Reads from the process's terminal.
#[derive(Debug, Default)]
pub struct TermPrompt {
    piped: bool,
}

impl TermPrompt {
    /// dialoguer is only used when both stdin and stdout are terminals.
    pub fn new() -> Self {
        TermPrompt::for_streams(io::stdin().is_terminal(), Term::stdout().is_term())
    }

    fn for_streams(stdin_is_tty: bool, stdout_is_tty: bool) -> Self {
        TermPrompt {
            piped: !(stdin_is_tty && stdout_is_tty),
        }
    }

    fn read_piped(&self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}: ", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompt for TermPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        if self.piped {
            return self.read_piped(prompt);
        }

        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|err| match err {
                dialoguer::Error::IO(e) => e,
            })
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Answers from a fixed list, in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
