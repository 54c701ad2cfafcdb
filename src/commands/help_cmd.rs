use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputLine;

pub struct HelpCommand;

const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  help      - Show this help message",
    "  echo [text] - Print text to the terminal",
    "  clear     - Clear the terminal",
    "  date      - Display current date and time",
    "  ls        - List files and directories in current directory",
    "  cd [path] - Change directory",
    "  mkdir [dir] - Create a directory",
    "  rmdir [dir] - Remove a directory (empty only)",
    "  touch [file]- Create an empty file",
    "  rm [file] - Remove a file",
    "  cat [file] - Display file content",
    "  calc [expression] - Simple calculator (+ - * / and parentheses)",
    "  sysfetch  - Display system information",
    "  browser [query] | ddg [query] - Search DuckDuckGo in a new tab",
];

/// The full help listing, one line per entry.
pub fn help_lines() -> Vec<OutputLine> {
    HELP_LINES.iter().map(|line| OutputLine::normal(*line)).collect()
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(help_lines())
    }
}
