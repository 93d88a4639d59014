//! Output abstraction layer
//!
//! Provides a backend-agnostic interface for console output, with a colored
//! stdout implementation for the binary and a recording implementation for
//! tests.

use colored::Colorize;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use toolfinder::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Normal message");
/// output.success("Happy producing!");
/// output.error("Invalid choice");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes every level to stdout
///
/// Colors follow the global `colored` override, so `--no-color` applies here.
/// Write failures (a closed pipe, say) are ignored.
pub struct StdoutWriter<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> StdoutWriter<W> {
    /// Write the console formatting into `out` instead of stdout
    pub const fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn line(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }
}

impl<W: Write + Send> OutputWriter for StdoutWriter<W> {
    fn write(&self, message: &str) {
        self.line(message);
    }

    fn error(&self, message: &str) {
        self.line(&format!("{} {}", "❌".red(), message));
    }

    fn success(&self, message: &str) {
        self.line(&format!("{} {}", "✓".green(), message));
    }

    fn warning(&self, message: &str) {
        self.line(&format!("{} {}", "⚠️".yellow(), message));
    }

    fn info(&self, message: &str) {
        self.line(&message.dimmed().to_string());
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Writer that keeps every message in memory
///
/// # Examples
///
/// ```
/// use toolfinder::ui::output::{BufferWriter, MessageLevel, OutputWriter};
///
/// let writer = BufferWriter::new();
/// writer.error("Invalid choice");
///
/// assert_eq!(writer.messages(), vec![(MessageLevel::Error, "Invalid choice".to_string())]);
/// assert!(writer.contains("Invalid"));
/// ```
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages written so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Message texts joined with newlines
    #[must_use]
    pub fn text(&self) -> String {
        self.messages()
            .into_iter()
            .map(|(_, msg)| msg)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.count_containing(needle) > 0
    }

    /// Number of messages containing `needle`
    #[must_use]
    pub fn count_containing(&self, needle: &str) -> usize {
        self.messages()
            .iter()
            .filter(|(_, msg)| msg.contains(needle))
            .count()
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }
}
