//! Running kubectl as a child process

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use log::{debug, warn};
use tokio::io::AsyncRead;
use tokio::process::{Child, Command};

use crate::error::{FwdError, Result};

/// Boxed output stream of a running process
pub type OutputStream = Box<dyn AsyncRead + Send + Unpin>;

/// Executes the management binary with a fixed argument vector
pub trait CommandRunner: Send + Sync {
    /// Run to completion and capture stdout.
    ///
    /// Returns `None` when the process printed nothing. The exit status is
    /// not inspected; callers only react to presence or absence of text.
    fn run_sync(&self, args: &[String]) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Spawn without waiting and hand back a live handle
    fn run_async(&self, args: &[String]) -> Result<ProcessHandle>;
}

/// Live handle to a spawned process and its output streams
pub struct ProcessHandle {
    child: Option<Child>,
    stdout: Option<OutputStream>,
    stderr: Option<OutputStream>,
}

impl ProcessHandle {
    /// Take ownership of a child spawned with piped stdout/stderr
    pub fn from_child(mut child: Child) -> Self {
        let stdout = child.stdout.take().map(|s| Box::new(s) as OutputStream);
        let stderr = child.stderr.take().map(|s| Box::new(s) as OutputStream);
        Self {
            child: Some(child),
            stdout,
            stderr,
        }
    }

    /// Handle backed by arbitrary readers, with no OS process behind it
    pub fn from_readers(stdout: OutputStream, stderr: Option<OutputStream>) -> Self {
        Self {
            child: None,
            stdout: Some(stdout),
            stderr,
        }
    }

    /// OS process id, if there is a process and it has not been reaped
    pub fn id(&self) -> Option<u32> {
        self.child.as_ref().and_then(|c| c.id())
    }

    pub(crate) fn into_parts(self) -> (Option<Child>, Option<OutputStream>, Option<OutputStream>) {
        (self.child, self.stdout, self.stderr)
    }
}

impl std::fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.id())
            .field("stdout", &self.stdout.is_some())
            .field("stderr", &self.stderr.is_some())
            .finish()
    }
}

/// Resolve the management binary on the search path (or as an explicit path)
pub fn locate_binary(name: &str) -> Result<PathBuf> {
    match which::which(name) {
        Ok(path) => {
            debug!("Located {} at {}", name, path.display());
            Ok(path)
        }
        Err(e) => {
            debug!("Could not locate {}: {}", name, e);
            Err(FwdError::MissingBinary(name.to_string()))
        }
    }
}

/// `tokio::process` runner bound to one binary
#[derive(Debug, Clone)]
pub struct KubectlRunner {
    binary: PathBuf,
}

impl KubectlRunner {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Locate `name` and build a runner for it
    pub fn locate(name: &str) -> Result<Self> {
        locate_binary(name).map(Self::new)
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command(&self, args: &[String]) -> Command {
        let mut command = Command::new(&self.binary);
        command.args(args).stdin(Stdio::null());
        command
    }
}

impl CommandRunner for KubectlRunner {
    async fn run_sync(&self, args: &[String]) -> Result<Option<String>> {
        debug!("Running {} {:?}", self.binary.display(), args);
        let output = self.command(args).output().await?;
        debug!("{:?} exited with {}", args, output.status);

        if !output.stderr.is_empty() {
            warn!(
                "{} {:?}: {}",
                self.binary.display(),
                args,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(stdout))
        }
    }

    fn run_async(&self, args: &[String]) -> Result<ProcessHandle> {
        debug!("Spawning {} {:?}", self.binary.display(), args);
        // Not killed on drop: a superseded forward keeps running
        let child = self
            .command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(false)
            .spawn()?;
        debug!("Spawned pid {:?}", child.id());
        Ok(ProcessHandle::from_child(child))
    }
}
