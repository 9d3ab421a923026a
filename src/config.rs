/// Configuration constants for the kubectl protocol
pub mod kubectl {
    /// Default management binary, resolved against the search path
    pub const BINARY: &str = "kubectl";

    /// Arguments listing context names as a quoted, space-separated string
    pub const FIND_CONTEXTS: &[&str] = &["config", "view", "-o", "jsonpath='{.contexts[*].name}'"];

    /// Arguments listing pod names, one per line
    pub const FIND_PODS: &[&str] = &[
        "get",
        "--no-headers=true",
        "pods",
        "-o",
        "custom-columns=:metadata.name",
    ];

    /// Leading arguments for switching context (followed by the context name)
    pub const SWITCH_CONTEXT: &[&str] = &["config", "use-context"];

    /// Subcommand starting a port-forward (followed by pod and `<local>:<remote>`)
    pub const PORT_FORWARD: &str = "port-forward";
}

/// Prompt labels shown to the operator
pub mod prompts {
    pub const CONTEXT: &str = "Choose a k8s context";
    pub const POD: &str = "Choose a pod";
    pub const LOCAL_PORT: &str = "Local port:";
    pub const REMOTE_PORT: &str = "Remote port:";
}

/// Environment variables mirrored by CLI flags
pub mod env {
    /// Overrides the management binary
    pub const KUBECTL: &str = "PODFWD_KUBECTL";

    /// Log filter
    pub const LOG_LEVEL: &str = "PODFWD_LOG_LEVEL";
}

/// Default values for CLI and session loop
pub mod defaults {
    use std::time::Duration;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Pause before rediscovering when no pod is available
    pub const EMPTY_DISCOVERY_BACKOFF: Duration = Duration::from_secs(2);
}
