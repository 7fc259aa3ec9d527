//! Ports (trait boundaries) between the game loop and the outside world.
//!
//! The session only talks to move sources through [`Agent`] and to the
//! player through [`Console`]; concrete implementations live in
//! [`crate::adapters`].

pub mod agent;
pub mod console;

pub use agent::Agent;
pub use console::Console;
