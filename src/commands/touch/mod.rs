// src/commands/touch/mod.rs
use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn arity(&self) -> Arity {
        Arity::Required { what: "file name", usage: None }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.operand().to_string();
        let cwd = ctx.session.cwd().to_string();
        match ctx.session.fs_mut().create_file(&cwd, &name) {
            Ok(()) => CommandResult::line(format!("File \"{}\" created.", name)),
            Err(e) => CommandResult::error(e),
        }
    }
}
