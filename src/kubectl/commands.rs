//! kubectl invocations used by the session loop

use crate::config::kubectl as kubectl_config;

use super::models::PortSpec;

/// One of the four fixed kubectl invocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KubectlCommand {
    /// List context names (`config view -o jsonpath=...`)
    FindContexts,
    /// Switch the active context
    SwitchContext(String),
    /// List pod names in the active context
    FindPods,
    /// Long-running port-forward to a pod
    ForwardPort { pod: String, ports: PortSpec },
}

impl KubectlCommand {
    /// Argument vector passed to the binary, without shell quoting
    pub fn args(&self) -> Vec<String> {
        match self {
            KubectlCommand::FindContexts => to_owned(kubectl_config::FIND_CONTEXTS),
            KubectlCommand::FindPods => to_owned(kubectl_config::FIND_PODS),
            KubectlCommand::SwitchContext(name) => {
                let mut args = to_owned(kubectl_config::SWITCH_CONTEXT);
                args.push(name.clone());
                args
            }
            KubectlCommand::ForwardPort { pod, ports } => vec![
                kubectl_config::PORT_FORWARD.to_string(),
                pod.clone(),
                ports.forward_arg(),
            ],
        }
    }
}

fn to_owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}
