// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{Listing, NodeKind};
use crate::output::{LineClass, OutputLine};

pub struct LsCommand;

/// Line shown for a directory with no entries.
pub const EMPTY_MARKER: &str = " (empty directory)";

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let listing = match ctx.session.fs().list(ctx.session.cwd()) {
            Ok(listing) => listing,
            Err(e) => return CommandResult::error(e),
        };

        match listing {
            Listing::Empty => CommandResult::line(EMPTY_MARKER),
            Listing::Entries(entries) => CommandResult::success(
                entries
                    .into_iter()
                    .map(|entry| {
                        let class = match entry.kind {
                            NodeKind::Directory => LineClass::Directory,
                            NodeKind::File => LineClass::File,
                        };
                        OutputLine::new(entry.name, class)
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{run, texts};
    use crate::session::ShellSession;

    #[tokio::test]
    async fn test_ls_empty_home() {
        let mut session = ShellSession::new();
        let result = run(&LsCommand, &mut session, &[]).await;
        assert!(result.is_success());
        assert_eq!(texts(&result), vec![EMPTY_MARKER]);
        assert_eq!(result.lines().next().map(|l| l.class), Some(LineClass::Normal));
    }

    #[tokio::test]
    async fn test_ls_root_classes() {
        let mut session = ShellSession::new();
        session.change_directory("/").unwrap();
        let result = run(&LsCommand, &mut session, &[]).await;
        let lines: Vec<(&str, LineClass)> =
            result.lines().map(|l| (l.text.as_str(), l.class)).collect();
        assert_eq!(
            lines,
            vec![
                ("bin", LineClass::Directory),
                ("documents.txt", LineClass::File),
                ("etc", LineClass::Directory),
                ("home", LineClass::Directory),
            ]
        );
    }

    #[tokio::test]
    async fn test_ls_ignores_arguments() {
        let mut session = ShellSession::new();
        let result = run(&LsCommand, &mut session, &["/"]).await;
        assert_eq!(texts(&result), vec![EMPTY_MARKER]);
    }
}
