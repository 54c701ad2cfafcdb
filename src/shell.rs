//! Shell Environment
//!
//! Main entry point for the shell. Ties together the session, the command
//! registry and the external capabilities, and turns each submitted line
//! into output.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::arithmetic::ExpressionEvaluator;
use crate::commands::help_cmd::help_lines;
use crate::commands::{create_default_registry, Arity, CommandContext, CommandRegistry, CommandResult, Services};
use crate::error::ShellError;
use crate::fs::{FsError, VirtualFileSystem, HOME_DIR};
use crate::host::{LinkOpener, SystemInfoProvider};
use crate::output::{OutputEvent, OutputLine, OutputSink};
use crate::session::{ShellSession, DEFAULT_HOST, DEFAULT_USER};

/// Exit status reported for an unknown verb.
pub const EXIT_UNKNOWN_COMMAND: i32 = 127;

/// Options for creating a shell.
#[derive(Default)]
pub struct ShellOptions {
    /// User shown in the prompt
    pub user: Option<String>,
    /// Host shown in the prompt
    pub host: Option<String>,
    /// Starting directory (defaults to `/home/user`)
    pub cwd: Option<String>,
    /// Source of `sysfetch` data
    pub system_info: Option<Arc<dyn SystemInfoProvider>>,
    /// Evaluator behind `calc`
    pub evaluator: Option<Arc<dyn ExpressionEvaluator>>,
    /// Opener behind `browser` / `ddg`
    pub link_opener: Option<Arc<dyn LinkOpener>>,
}

/// An interactive shell session.
pub struct Shell {
    session: ShellSession,
    registry: CommandRegistry,
    services: Services,
}

impl Shell {
    /// Create a shell over the seeded file system.
    pub fn new(options: ShellOptions) -> Result<Self, FsError> {
        let cwd = options.cwd.unwrap_or_else(|| HOME_DIR.to_string());
        let mut session = ShellSession::with_fs(VirtualFileSystem::seeded(), &cwd)?;
        session.set_identity(
            options.user.unwrap_or_else(|| DEFAULT_USER.to_string()),
            options.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        );

        let defaults = Services::default();
        let services = Services {
            system_info: options.system_info.unwrap_or(defaults.system_info),
            evaluator: options.evaluator.unwrap_or(defaults.evaluator),
            link_opener: options.link_opener.unwrap_or(defaults.link_opener),
        };

        Ok(Self {
            session,
            registry: create_default_registry(),
            services,
        })
    }

    pub fn session(&self) -> &ShellSession {
        &self.session
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn cwd(&self) -> &str {
        self.session.cwd()
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    /// Greeting shown when an interactive session starts.
    pub fn banner(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::normal("Welcome to memsh!"),
            OutputLine::normal("Type 'help' to see available commands."),
        ]
    }

    /// Run one submitted line and send its output to `sink`.
    ///
    /// Returns the exit status; blank input is ignored and returns 0.
    pub async fn dispatch(&mut self, line: &str, sink: &mut dyn OutputSink) -> i32 {
        let result = self.execute(line).await;
        for event in &result.events {
            sink.apply(event);
        }
        result.exit_code
    }

    /// Run one submitted line and return its output.
    pub async fn execute(&mut self, line: &str) -> CommandResult {
        let mut parts = line.split_whitespace();
        let verb = match parts.next() {
            Some(verb) => verb,
            None => return CommandResult::success(Vec::new()),
        };
        let args: Vec<String> = parts.map(str::to_string).collect();

        self.session.history_mut().push(line);

        let Some(command) = self.registry.get(verb) else {
            warn!(verb, "command not found");
            let mut result = CommandResult::error(ShellError::UnknownCommand(verb.to_string()));
            result.events.extend(help_lines().into_iter().map(OutputEvent::Line));
            result.exit_code = EXIT_UNKNOWN_COMMAND;
            return result;
        };

        if let Arity::Required { what, usage } = command.arity() {
            if args.is_empty() {
                let mut result = CommandResult::error(ShellError::MissingArgument { what });
                if let Some(usage) = usage {
                    result.events.push(OutputEvent::Line(OutputLine::normal(usage)));
                }
                return result;
            }
        }

        debug!(verb, args = args.len(), cwd = %self.session.cwd(), "dispatching command");
        let ctx = CommandContext {
            args,
            session: &mut self.session,
            services: &self.services,
        };
        command.execute(ctx).await
    }

    /// "Recall older" key: the line to show, or `None` when nothing changes.
    pub fn recall_older(&mut self) -> Option<String> {
        self.session.history_mut().recall_older().map(str::to_string)
    }

    /// "Recall newer" key: the line to show, or `None` when nothing changes.
    pub fn recall_newer(&mut self) -> Option<String> {
        self.session.history_mut().recall_newer().map(str::to_string)
    }
}
