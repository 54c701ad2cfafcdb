//! Host Capabilities
//!
//! The shell never measures its environment or opens links itself. These
//! traits are the seams through which a front-end supplies that, together
//! with the default implementations used by the `memsh` binary.

use std::io;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use serde::Serialize;

/// Snapshot shown by `sysfetch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub os_label: String,
    pub kernel_label: String,
    pub shell_label: String,
    pub agent_label: String,
    pub resolution: String,
    pub uptime: String,
}

pub trait SystemInfoProvider: Send + Sync {
    fn snapshot(&self) -> SystemInfo;
}

/// A fixed snapshot is its own provider.
impl SystemInfoProvider for SystemInfo {
    fn snapshot(&self) -> SystemInfo {
        self.clone()
    }
}

/// Describes the process running the shell.
#[derive(Debug, Clone)]
pub struct HostInfoProvider {
    started: Instant,
}

impl HostInfoProvider {
    pub fn new() -> Self {
        Self { started: Instant::now() }
    }
}

impl Default for HostInfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemInfoProvider for HostInfoProvider {
    fn snapshot(&self) -> SystemInfo {
        let resolution = match terminal_size::terminal_size() {
            Some((terminal_size::Width(cols), terminal_size::Height(rows))) => {
                format!("{}x{}", cols, rows)
            }
            None => "unknown".to_string(),
        };
        SystemInfo {
            os_label: "memsh OS".to_string(),
            kernel_label: "memsh Kernel 1.0".to_string(),
            shell_label: "memsh CLI".to_string(),
            agent_label: format!(
                "{}/{} ({})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
            resolution,
            uptime: format_uptime(self.started.elapsed()),
        }
    }
}

/// `<minutes>m <seconds>s`
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Capability for opening an external URL.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Hands the URL to the platform's default opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.arg(url);
            c
        } else if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", url]);
            c
        } else {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        run_to_completion(Self::command(url))
    }
}

/// Run `command` silently and wait for it to exit.
fn run_to_completion(mut command: Command) -> io::Result<()> {
    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{:?} exited with {}", command.get_program(), status),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_opener_waits_for_exit_status() {
        assert!(run_to_completion(Command::new("true")).is_ok());
        assert!(run_to_completion(Command::new("false")).is_err());
    }

    #[test]
    fn test_opener_missing_program() {
        let err = run_to_completion(Command::new("memsh-no-such-opener")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0m 0s");
        assert_eq!(format_uptime(Duration::from_secs(59)), "0m 59s");
        assert_eq!(format_uptime(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_host_snapshot_labels() {
        let info = HostInfoProvider::new().snapshot();
        assert_eq!(info.os_label, "memsh OS");
        assert!(info.agent_label.starts_with("memsh/"));
        assert_eq!(info.uptime, "0m 0s");
    }

    #[test]
    fn test_fixed_snapshot_provider() {
        let info = SystemInfo {
            os_label: "a".into(),
            kernel_label: "b".into(),
            shell_label: "c".into(),
            agent_label: "d".into(),
            resolution: "80x24".into(),
            uptime: "1m 0s".into(),
        };
        assert_eq!(info.snapshot(), info);
    }
}
