// src/commands/date/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use chrono::{DateTime, Local, TimeZone};

pub struct DateCommand;

/// `10/17/2026, 8:57:03 PM`
const FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(FORMAT).to_string()
}

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str { "date" }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::line(format_timestamp(&Local::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{run, texts};
    use crate::session::ShellSession;
    use chrono::Utc;

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 20, 7, 9).unwrap();
        assert_eq!(format_timestamp(&dt), "1/5/2024, 8:07:09 PM");
        let morning = Utc.with_ymd_and_hms(2024, 12, 25, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp(&morning), "12/25/2024, 12:30:00 AM");
    }

    #[tokio::test]
    async fn test_date_emits_one_line() {
        let mut session = ShellSession::new();
        let result = run(&DateCommand, &mut session, &[]).await;
        assert!(result.is_success());
        let lines = texts(&result);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("AM") || lines[0].ends_with("PM"));
    }
}
