//! CLI argument parsing

use clap::Parser;

use crate::config::{defaults, env, kubectl};

/// podfwd CLI
///
/// Takes no required arguments: the interactive loop starts immediately.
#[derive(Parser, Debug)]
#[command(name = "podfwd")]
#[command(version)]
#[command(
    about = "Pick a kubectl context and pod, then keep a port-forward running",
    long_about = None
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = env::LOG_LEVEL, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// kubectl binary (name on PATH or explicit path)
    #[arg(long, env = env::KUBECTL, default_value = kubectl::BINARY)]
    pub kubectl: String,

    /// Hide progress spinners while kubectl runs
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
