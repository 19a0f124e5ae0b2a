//! # Lines and Sinks
//!
//! A [`Line`] is one emitted output line. A [`LineSink`] decides how it
//! reaches the outside world:
//!
//! - [`TextSink`]: decorated text, one line per write
//! - [`JsonSink`]: one JSON object per line
//! - `Vec<Line>`: collects lines in memory

use crate::decorate::Decorator;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use uptick_core::{Event, Style, messages};

// =============================================================================
// LINE
// =============================================================================

/// What kind of line this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Greeting,
    Notice,
    Counter,
    Done,
}

/// One output line, before decoration.
///
/// JSON output carries `kind`, `text`, and `count`. The style is for
/// terminal rendering only and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
    #[serde(skip_serializing, default)]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<u64>,
}

impl Line {
    /// Build the line for a plan event.
    ///
    /// Returns `None` for [`Event::Pause`], which prints nothing.
    pub fn from_event(event: Event, notice: &str) -> Option<Self> {
        let line = match event {
            Event::Greeting => Self {
                kind: LineKind::Greeting,
                text: messages::GREETING.to_string(),
                style: None,
                count: None,
            },
            Event::Notice => Self {
                kind: LineKind::Notice,
                text: notice.to_string(),
                style: Some(Style::notice()),
                count: None,
            },
            Event::Counter(count) => Self {
                kind: LineKind::Counter,
                text: messages::counter(count),
                style: Some(Style::counter()),
                count: Some(count),
            },
            Event::Done => Self {
                kind: LineKind::Done,
                text: messages::DONE.to_string(),
                style: None,
                count: None,
            },
            Event::Pause(_) => return None,
        };
        Some(line)
    }
}

// =============================================================================
// SINKS
// =============================================================================

/// Destination for emitted lines.
pub trait LineSink {
    fn emit(&mut self, line: &Line) -> Result<(), AppError>;
}

impl LineSink for Vec<Line> {
    fn emit(&mut self, line: &Line) -> Result<(), AppError> {
        self.push(line.clone());
        Ok(())
    }
}

/// Writes decorated text lines.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
    decorator: Decorator,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W, decorator: Decorator) -> Self {
        Self { writer, decorator }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for TextSink<W> {
    fn emit(&mut self, line: &Line) -> Result<(), AppError> {
        let rendered = match &line.style {
            Some(style) => self.decorator.decorate(&line.text, style),
            None => line.text.clone(),
        };
        writeln!(self.writer, "{}", rendered)?;
        // Each line must be visible before the next pause starts.
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes one JSON object per line.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for JsonSink<W> {
    fn emit(&mut self, line: &Line) -> Result<(), AppError> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
