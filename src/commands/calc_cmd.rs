use async_trait::async_trait;
use crate::arithmetic::format_number;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

pub struct CalcCommand;

const USAGE: &str = "Usage: calc [expression] (e.g., calc 2 + 3 * 4)";

#[async_trait]
impl Command for CalcCommand {
    fn name(&self) -> &'static str {
        "calc"
    }

    fn arity(&self) -> Arity {
        Arity::Required { what: "expression for calculator", usage: Some(USAGE) }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        match ctx.services.evaluator.evaluate(&ctx.text()) {
            Ok(value) => CommandResult::line(format!("= {}", format_number(value))),
            Err(e) => CommandResult::error(e),
        }
    }
}
