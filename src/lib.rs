//! podfwd - interactive kubectl port-forwarding
//!
//! Wraps `kubectl` to pick a context, pick a pod, choose a local/remote port
//! pair and start a port-forward, then starts over. Each new forward is
//! started without waiting for the previous one.
//!
//! # Example
//!
//! ```bash
//! # Run the loop with kubectl from PATH
//! podfwd
//!
//! # Use a specific binary and show debug logs
//! podfwd --kubectl /opt/bin/kubectl -l debug
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod kubectl;
pub mod session;
pub mod ui;

pub use cli::Cli;
pub use error::{FwdError, Result};
pub use kubectl::{
    locate_binary, parse_list, parse_scalar, CommandRunner, Delimiter, Discovery,
    KubectlCommand, KubectlRunner, PortSpec, ProcessHandle,
};
pub use session::{ForwardSession, LoopOptions, SessionLoop, Shutdown, Step};
pub use ui::{
    error_banner, is_finite_number, Console, DialoguerPrompter, Prompter, TermConsole,
    TerminalState,
};
