//! Console port - line-based prompt/response surface

use crate::Result;

/// Text in, text out.
///
/// Implementations decide how prompts are rendered; callers only see lines.
pub trait Console: Send {
    /// Print a block of text
    fn show(&mut self, text: &str);

    /// Ask for one line of input. `Ok(None)` when input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Let the user pick one of `items`, returning its index.
    /// `Ok(None)` when input is closed.
    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>>;
}
