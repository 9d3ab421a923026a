//! States of the session loop

use crate::kubectl::PortSpec;

/// One state of the interactive loop, carrying what the next transition needs.
///
/// States cycle in declaration order; `Terminated` is only reachable
/// through cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    DiscoverContexts,
    SelectContext(Vec<String>),
    SwitchContext(String),
    DiscoverPods,
    SelectPod(Vec<String>),
    InputPorts(String),
    StartForward { pod: String, ports: PortSpec },
    Terminated,
}

impl Step {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Terminated)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::DiscoverContexts => "discover-contexts",
            Step::SelectContext(_) => "select-context",
            Step::SwitchContext(_) => "switch-context",
            Step::DiscoverPods => "discover-pods",
            Step::SelectPod(_) => "select-pod",
            Step::InputPorts(_) => "input-ports",
            Step::StartForward { .. } => "start-forward",
            Step::Terminated => "terminated",
        }
    }
}
