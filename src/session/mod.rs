//! Interactive session loop
//!
//! Sequences context discovery and switching, pod selection, port input and
//! the start of a long-running port-forward, then repeats until shutdown.

mod forward;
mod session_loop;
mod shutdown;
mod step;

pub use forward::{ForwardSession, Observer, OutputChunk, StreamKind};
pub use session_loop::{LoopOptions, SessionLoop};
pub use shutdown::Shutdown;
pub use step::Step;
