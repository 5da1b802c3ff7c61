//! Record handling shared by file preload and interactive input.

use std::borrow::Cow;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use bp_core::{CountTable, ParseError, PeakWindow, parse_interval};

/// Printed once when a session starts.
pub const INSTRUCTIONS: &str = "\
Instructions:
   The program takes inputs in the form `hh:mmhh:mm`,
   indicating a start time (first hh:mm) and end time (second hh:mm) for a bus driver's break.
   The break time is specified inclusively, i.e. it includes the start minute and the end minute.
   A break must start and end on the same day.
   Each input must occupy its own line, both in interactive mode and when reading from a file.
   Write `quit` or `exit` to end an interactive session and stop the program.";

/// Printed when the interactive session ends.
pub const FAREWELL: &str = "Goodbye!";

/// How reports are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result of feeding one line to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The record was applied; carries the new busiest period.
    Accepted(PeakWindow),
    /// The record was rejected and the counts are unchanged.
    Rejected(ParseError),
}

/// Decodes one raw input line, dropping its `\n` or `\r\n` terminator.
///
/// Invalid UTF-8 becomes replacement characters, so the line is still
/// handled as a (malformed) record instead of failing the read.
pub fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw
        .strip_suffix(b"\n")
        .map_or(raw, |rest| rest.strip_suffix(b"\r").unwrap_or(rest));
    String::from_utf8_lossy(raw)
}

#[derive(Serialize)]
struct Rejection<'a> {
    line: &'a str,
    error: String,
}

/// Owns the count table for the lifetime of the program.
///
/// Each line goes through parse, apply and report before the next one is
/// read.
pub struct Session<W> {
    table: CountTable,
    writer: W,
    format: OutputFormat,
    rejected: usize,
}

impl<W: Write> Session<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            table: CountTable::new(),
            writer,
            format,
            rejected: 0,
        }
    }

    /// Validates one record, applies it, and reports the busiest period.
    ///
    /// A rejected record is reported and leaves the table untouched.
    pub fn handle_line(&mut self, line: &str) -> Result<LineOutcome> {
        match parse_interval(line) {
            Ok(interval) => {
                self.table.apply(interval);
                let peak = self.table.find_peak();
                tracing::debug!(
                    %interval,
                    peak_start = %peak.start,
                    peak_end = %peak.end,
                    drivers = peak.drivers,
                    "record accepted"
                );
                match self.format {
                    OutputFormat::Text => writeln!(self.writer, "{peak}")?,
                    OutputFormat::Json => {
                        writeln!(self.writer, "{}", serde_json::to_string(&peak)?)?;
                    }
                }
                Ok(LineOutcome::Accepted(peak))
            }
            Err(err) => {
                self.rejected += 1;
                tracing::debug!(kind = ?err.kind(), reason = %err.reason(), "record rejected");
                match self.format {
                    OutputFormat::Text => writeln!(self.writer, "{err}")?,
                    OutputFormat::Json => {
                        let rejection = Rejection {
                            line,
                            error: err.to_string(),
                        };
                        writeln!(self.writer, "{}", serde_json::to_string(&rejection)?)?;
                    }
                }
                Ok(LineOutcome::Rejected(err))
            }
        }
    }

    /// Writes a plain message line, such as the instructions or farewell.
    ///
    /// JSON output carries only reports, so messages are skipped there.
    pub fn say(&mut self, message: &str) -> Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub const fn table(&self) -> &CountTable {
        &self.table
    }

    /// Number of records rejected so far.
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
