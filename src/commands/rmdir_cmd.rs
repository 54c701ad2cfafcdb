use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

pub struct RmdirCommand;

#[async_trait]
impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn arity(&self) -> Arity {
        Arity::Required { what: "directory name", usage: None }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.operand().to_string();
        let cwd = ctx.session.cwd().to_string();
        match ctx.session.fs_mut().remove_directory(&cwd, &name) {
            Ok(()) => CommandResult::line(format!("Directory \"{}\" removed.", name)),
            Err(e) => CommandResult::error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{run, texts};
    use crate::session::ShellSession;

    #[tokio::test]
    async fn test_rmdir_empty() {
        let mut session = ShellSession::new();
        session.change_directory("/").unwrap();
        let result = run(&RmdirCommand, &mut session, &["bin"]).await;
        assert_eq!(texts(&result), vec!["Directory \"bin\" removed."]);
        assert_eq!(session.fs().kind_at("/bin"), None);
    }

    #[tokio::test]
    async fn test_rmdir_not_empty() {
        let mut session = ShellSession::new();
        session.change_directory("/").unwrap();
        let result = run(&RmdirCommand, &mut session, &["home"]).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(texts(&result), vec!["Error: Directory not empty: home"]);
        assert!(session.fs().kind_at("/home/user").is_some());
    }

    #[tokio::test]
    async fn test_rmdir_missing_or_file() {
        let mut session = ShellSession::new();
        session.change_directory("/").unwrap();
        let missing = run(&RmdirCommand, &mut session, &["nope"]).await;
        assert_eq!(texts(&missing), vec!["Error: Directory not found: nope"]);
        let file = run(&RmdirCommand, &mut session, &["documents.txt"]).await;
        assert_eq!(texts(&file), vec!["Error: Not a directory: documents.txt"]);
    }
}
