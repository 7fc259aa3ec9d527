//! In-memory console that replays canned answers.
//!
//! Drives sessions without a terminal: answers are consumed in order and
//! everything shown is captured for inspection.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, ports::Console};

#[derive(Debug, Default)]
struct Transcript {
    answers: VecDeque<String>,
    output: Vec<String>,
}

/// Scripted console for tests and demos.
///
/// Clones share the same transcript, so a test can hand one clone to a
/// session and read the output through another.
///
/// # Examples
///
/// ```
/// use noughts::adapters::ScriptedConsole;
/// use noughts::ports::Console;
///
/// let console = ScriptedConsole::new(["5"]);
/// let mut handle = console.clone();
/// assert_eq!(handle.read_line("Position").unwrap().as_deref(), Some("5"));
/// assert_eq!(handle.read_line("Position").unwrap(), None);
/// assert!(console.output().iter().any(|line| line.contains("Position")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    transcript: Arc<Mutex<Transcript>>,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `answers`, in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let transcript = Transcript {
            answers: answers.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        };
        Self {
            transcript: Arc::new(Mutex::new(transcript)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Transcript> {
        self.transcript.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything shown so far, prompts included
    pub fn output(&self) -> Vec<String> {
        self.lock().output.clone()
    }

    /// The whole transcript joined into one string
    pub fn output_text(&self) -> String {
        self.lock().output.join("\n")
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.lock().answers.len()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) {
        self.lock().output.push(text.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut transcript = self.lock();
        transcript.output.push(format!("{prompt}: "));
        Ok(transcript.answers.pop_front())
    }

    /// Answers are read as 1-based item numbers; anything else is re-asked
    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        {
            let mut transcript = self.lock();
            for (i, item) in items.iter().enumerate() {
                transcript.output.push(format!("{}. {item}", i + 1));
            }
        }

        loop {
            let Some(answer) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => self.show("Invalid choice! Try again."),
            }
        }
    }
}
