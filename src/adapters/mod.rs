//! Adapters implementing domain ports.
//!
//! Move sources implement [`crate::ports::Agent`]; terminal front ends
//! implement [`crate::ports::Console`].

pub mod engine;
pub mod random;
pub mod scripted_console;
pub mod terminal_console;

pub use engine::EngineAgent;
pub use random::RandomAgent;
pub use scripted_console::ScriptedConsole;
pub use terminal_console::TerminalConsole;
