//! UI utilities for terminal interaction
//!
//! Prompts, operator-facing output and progress spinners.

mod console;
mod prompt;
mod spinner;
mod terminal;

pub use console::{error_banner, Console, TermConsole};
pub use prompt::{is_finite_number, DialoguerPrompter, Prompter, Validator};
pub use spinner::{clear_spinner, create_spinner};
pub use terminal::TerminalState;
