// src/commands/types.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::arithmetic::{ArithmeticEvaluator, ExpressionEvaluator};
use crate::error::ShellError;
use crate::host::{HostInfoProvider, LinkOpener, SystemInfoProvider, SystemLinkOpener};
use crate::output::{LineClass, OutputEvent, OutputLine};
use crate::session::ShellSession;

/// External capabilities handed to every command.
#[derive(Clone)]
pub struct Services {
    pub system_info: Arc<dyn SystemInfoProvider>,
    pub evaluator: Arc<dyn ExpressionEvaluator>,
    pub link_opener: Arc<dyn LinkOpener>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            system_info: Arc::new(HostInfoProvider::new()),
            evaluator: Arc::new(ArithmeticEvaluator),
            link_opener: Arc::new(SystemLinkOpener),
        }
    }
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub events: Vec<OutputEvent>,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(lines: Vec<OutputLine>) -> Self {
        Self {
            events: lines.into_iter().map(OutputEvent::Line).collect(),
            exit_code: 0,
        }
    }

    /// A single normal line.
    pub fn line(text: impl Into<String>) -> Self {
        Self::success(vec![OutputLine::normal(text)])
    }

    pub fn error(err: impl Into<ShellError>) -> Self {
        Self::with_exit_code(vec![OutputEvent::Line(OutputLine::error(err.into().to_string()))], 1)
    }

    pub fn clear() -> Self {
        Self::with_exit_code(vec![OutputEvent::Clear], 0)
    }

    pub fn with_exit_code(events: Vec<OutputEvent>, exit_code: i32) -> Self {
        Self { events, exit_code }
    }

    /// Append a line after whatever is already there.
    pub fn push(&mut self, text: impl Into<String>, class: LineClass) {
        self.events.push(OutputEvent::Line(OutputLine::new(text, class)));
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Emitted lines, ignoring clear requests.
    pub fn lines(&self) -> impl Iterator<Item = &OutputLine> {
        self.events.iter().filter_map(|e| match e {
            OutputEvent::Line(line) => Some(line),
            OutputEvent::Clear => None,
        })
    }
}

/// Argument contract of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Arguments are optional (or ignored).
    Optional,
    /// At least one argument is needed; `what` names it in the error and
    /// `usage` is printed after the error when present.
    Required {
        what: &'static str,
        usage: Option<&'static str>,
    },
}

/// Command execution context
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub session: &'a mut ShellSession,
    pub services: &'a Services,
}

impl CommandContext<'_> {
    /// First argument, or `""` when there is none.
    pub fn operand(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }

    /// All arguments joined by single spaces.
    pub fn text(&self) -> String {
        self.args.join(" ")
    }
}

/// Command trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    fn arity(&self) -> Arity {
        Arity::Optional
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Run `cmd` against `session` with default services.
    pub async fn run(cmd: &dyn Command, session: &mut ShellSession, args: &[&str]) -> CommandResult {
        let services = Services::default();
        run_with(cmd, session, &services, args).await
    }

    pub async fn run_with(
        cmd: &dyn Command,
        session: &mut ShellSession,
        services: &Services,
        args: &[&str],
    ) -> CommandResult {
        let ctx = CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            session,
            services,
        };
        cmd.execute(ctx).await
    }

    pub fn texts(result: &CommandResult) -> Vec<&str> {
        result.lines().map(|l| l.text.as_str()).collect()
    }
}
