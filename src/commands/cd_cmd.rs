use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn arity(&self) -> Arity {
        Arity::Required { what: "directory path", usage: None }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let target = ctx.operand().to_string();
        match ctx.session.change_directory(&target) {
            Ok(()) => CommandResult::success(Vec::new()),
            Err(e) => CommandResult::error(e),
        }
    }
}
