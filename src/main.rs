//! memsh entry point.
//!
//! Usage:
//!   memsh                      # Interactive shell
//!   memsh -c 'mkdir a; ...'    # Run lines and exit
//!   memsh script.txt           # Run a file of lines
//!   echo ls | memsh            # Run piped lines

use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use memsh::config::Config;
use memsh::terminal::{AnsiSink, HistoryKey};
use memsh::{BufferedSink, OutputSink, Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "memsh")]
#[command(about = "A minimal shell over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Execute lines from the command line argument (';' or newline separated)
    #[arg(short = 'c')]
    script: Option<String>,

    /// Output results as JSON (lines, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Path to a memsh.toml configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// User name shown in the prompt
    #[arg(long = "user")]
    user: Option<String>,

    /// Host name shown in the prompt
    #[arg(long = "host")]
    host: Option<String>,

    /// Starting directory within the virtual filesystem
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Skip the welcome banner
    #[arg(long = "no-banner")]
    no_banner: bool,

    /// File of lines to execute
    #[arg()]
    script_file: Option<PathBuf>,
}

fn init_tracing() {
    let filter = std::env::var("MEMSH_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let show_banner = config.show_banner() && !cli.no_banner;

    let mut shell = Shell::new(ShellOptions {
        user: cli.user.clone().or(config.user),
        host: cli.host.clone().or(config.host),
        cwd: cli.cwd.clone().or(config.cwd),
        ..Default::default()
    })
    .context("cannot start shell")?;

    let script = if let Some(s) = cli.script.clone() {
        Some(s.replace(';', "\n"))
    } else if let Some(ref file) = cli.script_file {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("cannot read script file: {}", file.display()))?;
        Some(content)
    } else if !std::io::stdin().is_terminal() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("cannot read stdin")?;
        Some(buf)
    } else {
        None
    };

    let code = match script {
        Some(script) => run_script(&mut shell, &script, cli.json).await?,
        None => {
            run_interactive(shell, show_banner).await?;
            0
        }
    };
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

/// Dispatch every line of `script`; the status is that of the last non-blank line.
async fn run_script(shell: &mut Shell, script: &str, json: bool) -> Result<i32> {
    let mut code = 0;
    if json {
        let mut sink = BufferedSink::new();
        for line in script.lines().filter(|l| !l.trim().is_empty()) {
            code = shell.dispatch(line, &mut sink).await;
        }
        println!(
            "{}",
            serde_json::json!({ "lines": sink.lines(), "exitCode": code })
        );
    } else {
        let color = std::io::stdout().is_terminal();
        let mut sink = AnsiSink::new(std::io::stdout().lock(), color);
        for line in script.lines().filter(|l| !l.trim().is_empty()) {
            code = shell.dispatch(line, &mut sink).await;
        }
    }
    Ok(code)
}

/// Line-editing loop. Up/Down are answered by the shell's own history.
async fn run_interactive(shell: Shell, show_banner: bool) -> Result<()> {
    let shell = Arc::new(tokio::sync::Mutex::new(shell));
    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;
    HistoryKey::bind(&mut rl, &shell);
    let mut sink = AnsiSink::new(std::io::stdout(), true);

    if show_banner {
        for line in shell.lock().await.banner() {
            sink.emit(&line.text, line.class);
        }
    }

    loop {
        let prompt = format!("{} ", shell.lock().await.prompt());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }
                shell.lock().await.dispatch(&line, &mut sink).await;
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }
    Ok(())
}
