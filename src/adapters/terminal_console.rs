//! Interactive terminal front end

use std::io::ErrorKind;

use dialoguer::{Input, Select};

use crate::{Result, ports::Console};

/// Reads from the terminal with dialoguer prompts and prints to stdout
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

/// Ctrl-C and a closed stdin both mean the player has left
#[allow(irrefutable_let_patterns)]
fn input_closed(err: &dialoguer::Error) -> bool {
    if let dialoguer::Error::IO(io) = err {
        matches!(io.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted)
    } else {
        false
    }
}

impl Console for TerminalConsole {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text();

        match answer {
            Ok(line) => Ok(Some(line)),
            Err(err) if input_closed(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .report(false)
            .interact_opt();

        match selection {
            Ok(choice) => Ok(choice),
            Err(err) if input_closed(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
