use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::host::SystemInfo;
use crate::output::OutputLine;

pub struct SysfetchCommand;

const MASCOT: &[&str] = &[
    r"     /\_/\",
    r#"    ( o.o )  <---  "Taggy" the memsh mascot!"#,
    r"    > ^ <     /",
    r"   /   _ \   /",
    r"  |    / \  /",
    r"   \  /   \",
    r"    ||    *",
    r"    \/",
    "",
];

/// Mascot followed by one labelled line per field.
pub fn render(info: &SystemInfo) -> Vec<OutputLine> {
    let fields = [
        ("OS Name:", &info.os_label),
        ("Kernel:", &info.kernel_label),
        ("Shell:", &info.shell_label),
        ("Agent:", &info.agent_label),
        ("Resolution:", &info.resolution),
        ("Uptime:", &info.uptime),
    ];
    MASCOT
        .iter()
        .map(|line| OutputLine::normal(*line))
        .chain(
            fields
                .iter()
                .map(|(label, value)| OutputLine::normal(format!("        {:<12}{}", label, value))),
        )
        .collect()
}

#[async_trait]
impl Command for SysfetchCommand {
    fn name(&self) -> &'static str {
        "sysfetch"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(render(&ctx.services.system_info.snapshot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::commands::types::test_support::{run_with, texts};
    use crate::commands::Services;
    use crate::session::ShellSession;

    fn fixed() -> SystemInfo {
        SystemInfo {
            os_label: "Test OS".into(),
            kernel_label: "Test Kernel".into(),
            shell_label: "Test Shell".into(),
            agent_label: "agent/1".into(),
            resolution: "80x24".into(),
            uptime: "3m 4s".into(),
        }
    }

    #[tokio::test]
    async fn test_sysfetch_uses_provider() {
        let mut session = ShellSession::new();
        let services = Services { system_info: Arc::new(fixed()), ..Services::default() };
        let result = run_with(&SysfetchCommand, &mut session, &services, &[]).await;
        assert!(result.is_success());
        let lines = texts(&result);
        assert_eq!(lines.len(), MASCOT.len() + 6);
        assert_eq!(lines[MASCOT.len()], "        OS Name:    Test OS");
        assert_eq!(lines[MASCOT.len() + 4], "        Resolution: 80x24");
        assert_eq!(lines.last(), Some(&"        Uptime:     3m 4s"));
    }
}
