//! User-facing output

use dialoguer::console::style;

/// Where the session loop writes operator-facing text
pub trait Console: Send + Sync {
    /// Highlighted line (context switch confirmation, chosen pod, forward output)
    fn banner(&self, text: &str);

    /// Plain informational line
    fn notice(&self, text: &str);
}

/// Writes to stdout with white-on-blue banners
#[derive(Debug, Clone, Copy, Default)]
pub struct TermConsole;

impl Console for TermConsole {
    fn banner(&self, text: &str) {
        println!("{}", style(text).white().on_blue().bold());
    }

    fn notice(&self, text: &str) {
        println!("{}", text);
    }
}

/// Render a fatal error the way the CLI reports a missing dependency
pub fn error_banner(text: &str) -> String {
    style(text).white().on_red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_banner_keeps_text() {
        assert!(error_banner("kubectl missing").contains("kubectl missing"));
    }
}
