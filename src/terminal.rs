//! Terminal output for interactive use.
//!
//! Renders semantic lines with ANSI colours: errors red, directories bold
//! blue, everything else plain.

use std::io::Write;
use std::sync::Arc;

use owo_colors::OwoColorize;
use rustyline::{
    Cmd, ConditionalEventHandler, Event, EventContext, EventHandler, KeyCode, KeyEvent, Modifiers,
    Movement, RepeatCount,
};
use tokio::sync::Mutex;
use tracing::warn;

use crate::output::{LineClass, OutputSink};
use crate::shell::Shell;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub struct AnsiSink<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str, class: LineClass) -> std::io::Result<()> {
        if !self.color {
            return writeln!(self.out, "{}", text);
        }
        match class {
            LineClass::Error => writeln!(self.out, "{}", text.red()),
            LineClass::Directory => writeln!(self.out, "{}", text.blue().bold()),
            LineClass::Normal | LineClass::File => writeln!(self.out, "{}", text),
        }
    }
}

impl<W: Write> OutputSink for AnsiSink<W> {
    fn emit(&mut self, text: &str, class: LineClass) {
        if let Err(e) = self.write_line(text, class) {
            warn!(error = %e, "failed to write output");
        }
    }

    fn clear(&mut self) {
        let result = write!(self.out, "{}", CLEAR_SCREEN).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to clear screen");
        }
    }
}

/// Direction of a history key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall {
    Older,
    Newer,
}

/// Line-editor handler that answers Up/Down from the shell's own history.
pub struct HistoryKey {
    shell: Arc<Mutex<Shell>>,
    recall: Recall,
}

impl HistoryKey {
    pub fn new(shell: Arc<Mutex<Shell>>, recall: Recall) -> Self {
        Self { shell, recall }
    }

    /// Bind Up and Down on `editor` to the shell's history.
    pub fn bind<H: rustyline::Helper, I: rustyline::history::History>(
        editor: &mut rustyline::Editor<H, I>,
        shell: &Arc<Mutex<Shell>>,
    ) {
        for (code, recall) in [(KeyCode::Up, Recall::Older), (KeyCode::Down, Recall::Newer)] {
            editor.bind_sequence(
                KeyEvent(code, Modifiers::NONE),
                EventHandler::Conditional(Box::new(Self::new(shell.clone(), recall))),
            );
        }
    }

    /// Replacement for the edited line, or `None` to leave it alone.
    fn recall(&self) -> Option<Cmd> {
        // Only contended while a line is being dispatched, never during editing.
        let mut shell = self.shell.try_lock().ok()?;
        let line = match self.recall {
            Recall::Older => shell.recall_older(),
            Recall::Newer => shell.recall_newer(),
        }?;
        Some(Cmd::Replace(Movement::WholeLine, Some(line)))
    }
}

impl ConditionalEventHandler for HistoryKey {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, _ctx: &EventContext) -> Option<Cmd> {
        self.recall()
    }
}
