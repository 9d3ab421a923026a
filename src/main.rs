//! podfwd - Main entry point

use std::sync::Arc;

use clap::Parser;
use dialoguer::console::Term;
use log::{debug, info};

use podfwd::{
    error_banner, Cli, DialoguerPrompter, KubectlRunner, LoopOptions, SessionLoop, Shutdown,
    TermConsole, TerminalState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting podfwd v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: kubectl={}, quiet={}", cli.kubectl, cli.quiet);

    let runner = match KubectlRunner::locate(&cli.kubectl) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("{}", error_banner(&e.to_string()));
            std::process::exit(1);
        }
    };

    let terminal = TerminalState::capture();
    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    let options = LoopOptions {
        quiet: cli.quiet,
        ..Default::default()
    };
    let mut session = SessionLoop::new(runner, DialoguerPrompter, Arc::new(TermConsole), shutdown)
        .with_options(options);
    let result = session.run().await;

    // A prompt thread may still hold the terminal in raw mode; exit without waiting on it
    if let Some(terminal) = &terminal {
        terminal.restore();
    }
    let _ = Term::stderr().show_cursor();
    result?;
    std::process::exit(0);
}
