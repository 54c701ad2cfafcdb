use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::run;
    use crate::output::OutputEvent;
    use crate::session::ShellSession;

    #[tokio::test]
    async fn test_clear_requests_clear() {
        let mut session = ShellSession::new();
        let result = run(&ClearCommand, &mut session, &[]).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.events, vec![OutputEvent::Clear]);
    }
}
