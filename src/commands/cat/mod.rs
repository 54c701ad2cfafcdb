// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn arity(&self) -> Arity {
        Arity::Required { what: "file name", usage: None }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        match ctx.session.fs().read_file(ctx.session.cwd(), ctx.operand()) {
            Ok(content) => CommandResult::line(content),
            Err(e) => CommandResult::error(e),
        }
    }
}
