// src/commands/mkdir/mod.rs
use async_trait::async_trait;
use crate::commands::{Arity, Command, CommandContext, CommandResult};

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn arity(&self) -> Arity {
        Arity::Required { what: "directory name", usage: None }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.operand().to_string();
        let cwd = ctx.session.cwd().to_string();
        match ctx.session.fs_mut().create_directory(&cwd, &name) {
            Ok(()) => CommandResult::line(format!("Directory \"{}\" created.", name)),
            Err(e) => CommandResult::error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{run, texts};
    use crate::fs::NodeKind;
    use crate::session::ShellSession;

    #[tokio::test]
    async fn test_mkdir_simple() {
        let mut session = ShellSession::new();
        let result = run(&MkdirCommand, &mut session, &["projects"]).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(texts(&result), vec!["Directory \"projects\" created."]);
        assert!(session.fs().list("/home/user").unwrap().contains("projects", NodeKind::Directory));
    }

    #[tokio::test]
    async fn test_mkdir_existing() {
        let mut session = ShellSession::new();
        run(&MkdirCommand, &mut session, &["projects"]).await;
        let result = run(&MkdirCommand, &mut session, &["projects"]).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(texts(&result), vec!["Error: Directory already exists: projects"]);
    }

    #[tokio::test]
    async fn test_mkdir_rejects_nested_name() {
        let mut session = ShellSession::new();
        let result = run(&MkdirCommand, &mut session, &["a/b"]).await;
        assert_eq!(result.exit_code, 1);
        assert!(session.fs().list("/home/user").unwrap().is_empty());
    }
}
