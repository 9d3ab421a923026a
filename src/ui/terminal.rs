//! Terminal mode snapshot
//!
//! A prompt blocked on a raw-mode key read is abandoned when the process
//! exits on an external signal, so `main` puts back the settings saved at
//! startup.

use std::process::{Command, Stdio};

use log::debug;

/// Settings of the controlling terminal as printed by `stty -g`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalState {
    settings: String,
}

impl TerminalState {
    /// Snapshot the terminal on stdin; `None` when stdin is not a terminal
    pub fn capture() -> Option<Self> {
        Self::capture_from(Stdio::inherit())
    }

    pub fn capture_from(stdin: Stdio) -> Option<Self> {
        let output = Command::new("stty")
            .arg("-g")
            .stdin(stdin)
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            debug!("stty -g exited with {}", output.status);
            return None;
        }
        Self::parse(&String::from_utf8_lossy(&output.stdout))
    }

    fn parse(raw: &str) -> Option<Self> {
        let settings = raw.trim();
        if settings.is_empty() {
            None
        } else {
            Some(Self {
                settings: settings.to_string(),
            })
        }
    }

    pub fn settings(&self) -> &str {
        &self.settings
    }

    /// Apply the saved settings to the terminal on stdin
    pub fn restore(&self) {
        match Command::new("stty")
            .arg(&self.settings)
            .stdin(Stdio::inherit())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => debug!("Restored terminal settings"),
            Ok(status) => debug!("stty exited with {} while restoring", status),
            Err(e) => debug!("Could not restore terminal settings: {}", e),
        }
    }
}
