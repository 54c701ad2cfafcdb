// src/commands/rm/mod.rs
use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn arity(&self) -> Arity {
        Arity::Required { what: "file name", usage: None }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.operand().to_string();
        let cwd = ctx.session.cwd().to_string();
        match ctx.session.fs_mut().remove_file(&cwd, &name) {
            Ok(()) => CommandResult::line(format!("File \"{}\" removed.", name)),
            Err(e) => CommandResult::error(e),
        }
    }
}
