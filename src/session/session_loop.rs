//! The interactive context → pod → ports → forward loop

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use crate::config::{defaults, prompts};
use crate::error::{FwdError, Result};
use crate::kubectl::{
    parse_list, parse_scalar, CommandRunner, Delimiter, Discovery, KubectlCommand, PortSpec,
};
use crate::ui::{clear_spinner, create_spinner, is_finite_number, Console, Prompter};

use super::forward::{ForwardSession, Observer, OutputChunk, StreamKind};
use super::shutdown::Shutdown;
use super::step::Step;

/// Tunables for the session loop
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Hide spinners while kubectl runs
    pub quiet: bool,
    /// Pause before starting over when no pod is available
    pub empty_backoff: Duration,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            quiet: false,
            empty_backoff: defaults::EMPTY_DISCOVERY_BACKOFF,
        }
    }
}

/// Drives the operator through context, pod and port selection, then starts
/// a forward and starts over without waiting for it.
pub struct SessionLoop<R, P> {
    runner: R,
    prompter: P,
    console: Arc<dyn Console>,
    shutdown: Shutdown,
    options: LoopOptions,
    forward: Option<ForwardSession>,
}

impl<R: CommandRunner, P: Prompter> SessionLoop<R, P> {
    pub fn new(runner: R, prompter: P, console: Arc<dyn Console>, shutdown: Shutdown) -> Self {
        Self {
            runner,
            prompter,
            console,
            shutdown,
            options: LoopOptions::default(),
            forward: None,
        }
    }

    pub fn with_options(mut self, options: LoopOptions) -> Self {
        self.options = options;
        self
    }

    /// The most recently started forward, if any
    pub fn active_forward(&self) -> Option<&ForwardSession> {
        self.forward.as_ref()
    }

    /// Run until shutdown is triggered
    pub async fn run(&mut self) -> Result<()> {
        let mut step = Step::DiscoverContexts;
        loop {
            step = self.advance(step).await?;
            if step.is_terminal() {
                info!("Session loop terminated");
                return Ok(());
            }
        }
    }

    /// Perform one transition, racing it against shutdown.
    ///
    /// An operator interrupt inside a prompt counts as shutdown.
    pub async fn advance(&mut self, step: Step) -> Result<Step> {
        if step.is_terminal() || self.shutdown.is_triggered() {
            return Ok(Step::Terminated);
        }
        debug!("Entering {}", step.name());

        let shutdown = self.shutdown.clone();
        let next = tokio::select! {
            biased;
            _ = shutdown.cancelled() => return Ok(Step::Terminated),
            next = self.transition(step) => next,
        };

        match next {
            Err(FwdError::Interrupted) => {
                shutdown.trigger();
                Ok(Step::Terminated)
            }
            other => other,
        }
    }

    async fn transition(&mut self, step: Step) -> Result<Step> {
        let next = match step {
            Step::DiscoverContexts => {
                match self
                    .discover(KubectlCommand::FindContexts, Delimiter::Whitespace)
                    .await?
                {
                    Discovery::Found(contexts) => Step::SelectContext(contexts),
                    Discovery::NoneAvailable => {
                        debug!("No contexts found, keeping the current one");
                        Step::DiscoverPods
                    }
                }
            }

            Step::SelectContext(contexts) => {
                let context = self.prompter.select(prompts::CONTEXT, &contexts).await?;
                Step::SwitchContext(context)
            }

            Step::SwitchContext(context) => {
                let command = KubectlCommand::SwitchContext(context);
                if let Some(raw) = self.capture(&command).await? {
                    self.console.banner(&parse_scalar(&raw));
                }
                Step::DiscoverPods
            }

            Step::DiscoverPods => {
                match self
                    .discover(KubectlCommand::FindPods, Delimiter::Newline)
                    .await?
                {
                    Discovery::Found(pods) => Step::SelectPod(pods),
                    Discovery::NoneAvailable => {
                        self.console.notice("No pods found in the current context");
                        tokio::time::sleep(self.options.empty_backoff).await;
                        Step::DiscoverContexts
                    }
                }
            }

            Step::SelectPod(pods) => {
                let pod = self.prompter.select(prompts::POD, &pods).await?;
                self.console.banner(&pod);
                Step::InputPorts(pod)
            }

            Step::InputPorts(pod) => {
                let local = self
                    .prompter
                    .input_validated(prompts::LOCAL_PORT, is_finite_number)
                    .await?;
                let remote = self
                    .prompter
                    .input_validated(prompts::REMOTE_PORT, is_finite_number)
                    .await?;
                let ports = PortSpec::new(local, remote);
                self.console.notice(&ports.to_string());
                Step::StartForward { pod, ports }
            }

            Step::StartForward { pod, ports } => {
                self.start_forward(pod, ports)?;
                Step::DiscoverContexts
            }

            Step::Terminated => Step::Terminated,
        };
        Ok(next)
    }

    /// Run a synchronous kubectl command behind a spinner
    async fn capture(&self, command: &KubectlCommand) -> Result<Option<String>> {
        let message = match command {
            KubectlCommand::FindContexts => "Listing contexts...",
            KubectlCommand::SwitchContext(_) => "Switching context...",
            KubectlCommand::FindPods => "Listing pods...",
            KubectlCommand::ForwardPort { .. } => "Starting port-forward...",
        };
        let spinner = create_spinner(message, self.options.quiet);
        let output = self.runner.run_sync(&command.args()).await;
        clear_spinner(spinner);
        output
    }

    async fn discover(&self, command: KubectlCommand, delimiter: Delimiter) -> Result<Discovery> {
        let discovery = match self.capture(&command).await? {
            Some(raw) => parse_list(&raw, delimiter),
            None => Discovery::NoneAvailable,
        };
        debug!("{:?} -> {:?}", command, discovery);
        Ok(discovery)
    }

    /// Spawn the forward and replace the tracked session without waiting on
    /// or terminating the previous one
    fn start_forward(&mut self, pod: String, ports: PortSpec) -> Result<()> {
        let command = KubectlCommand::ForwardPort { pod, ports };
        let handle = self.runner.run_async(&command.args())?;

        let console = Arc::clone(&self.console);
        let shutdown = self.shutdown.clone();
        // Silent once shutdown is triggered, even if the process keeps writing
        let observer: Observer = Arc::new(move |chunk: OutputChunk| {
            if shutdown.is_triggered() {
                return;
            }
            match chunk.stream {
                StreamKind::Stdout => console.banner(chunk.text.trim_end()),
                StreamKind::Stderr => console.notice(chunk.text.trim_end()),
            }
        });

        let session = ForwardSession::attach(handle, observer);
        info!("Started {:?} (pid {:?})", command, session.pid());

        if let Some(previous) = self.forward.replace(session) {
            debug!("No longer tracking forward pid {:?}", previous.pid());
        }
        Ok(())
    }
}
