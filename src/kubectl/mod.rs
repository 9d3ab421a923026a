//! kubectl collaborator
//!
//! Wraps the external management binary: the fixed argument vectors it is
//! invoked with, the runner that executes them and the parser that turns
//! captured output into names.

mod commands;
mod models;
mod parser;
mod runner;

pub use commands::KubectlCommand;
pub use models::{Discovery, PortSpec};
pub use parser::{parse_list, parse_scalar, Delimiter};
pub use runner::{locate_binary, CommandRunner, KubectlRunner, OutputStream, ProcessHandle};
