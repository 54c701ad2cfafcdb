//! Output Model
//!
//! Commands emit semantic lines, never markup. Presentation belongs to the
//! [`OutputSink`] the front-end supplies.

use serde::Serialize;

/// Semantic class of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineClass {
    #[default]
    Normal,
    Error,
    Directory,
    File,
}

/// One emitted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub text: String,
    pub class: LineClass,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, class: LineClass) -> Self {
        Self { text: text.into(), class }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, LineClass::Normal)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineClass::Error)
    }
}

/// Something a command asks the output surface to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    Line(OutputLine),
    Clear,
}

/// Destination for command output.
pub trait OutputSink {
    fn emit(&mut self, text: &str, class: LineClass);

    /// Wipe everything shown so far.
    fn clear(&mut self);

    fn apply(&mut self, event: &OutputEvent) {
        match event {
            OutputEvent::Line(line) => self.emit(&line.text, line.class),
            OutputEvent::Clear => self.clear(),
        }
    }
}

/// Sink that keeps lines in memory. `clear` drops what was collected.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BufferedSink {
    lines: Vec<OutputLine>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Text of every line, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn take(&mut self) -> Vec<OutputLine> {
        std::mem::take(&mut self.lines)
    }
}

impl OutputSink for BufferedSink {
    fn emit(&mut self, text: &str, class: LineClass) {
        self.lines.push(OutputLine::new(text, class));
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}
