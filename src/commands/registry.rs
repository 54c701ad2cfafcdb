// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

/// Verb lookup table. Names match exactly and case-sensitively.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered verbs in name order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        create_default_registry()
    }
}

use super::browser_cmd::BrowserCommand;
use super::calc_cmd::CalcCommand;
use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::date::DateCommand;
use super::echo::EchoCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::rm::RmCommand;
use super::rmdir_cmd::RmdirCommand;
use super::sysfetch_cmd::SysfetchCommand;
use super::touch::TouchCommand;

/// Register every built-in verb.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(DateCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmdirCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(CalcCommand));
    registry.register(Box::new(SysfetchCommand));
    registry.register(Box::new(BrowserCommand::BROWSER));
    registry.register(Box::new(BrowserCommand::DDG));
}

/// Registry holding all built-in verbs.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}
