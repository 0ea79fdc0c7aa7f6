use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::totals::Totals;

/// Where and how results are reported.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

/// The format used by an [Output].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// One JSON object per line.
    Json,
    /// Plain text.
    Normal,
}

/// A single line of JSON output.
#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
enum Line<'a> {
    Report(&'a Totals),
    Error { message: &'a str },
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Report an error which aborted the run.
    pub fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(&Line::Error {
                message: &m.to_string(),
            }),
            OutputKind::Normal => writeln!(self.out, "error: {m}"),
        }
    }

    pub fn report(&mut self, totals: &Totals) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(&Line::Report(totals)),
            OutputKind::Normal => {
                writeln!(self.out, "possible: {}", totals.possible)?;
                writeln!(self.out, "power: {}", totals.power)
            }
        }
    }

    /// Get the underlying writer back.
    pub fn into_inner(self) -> O {
        self.out
    }

    fn json(&mut self, line: &Line<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, line)?;
        writeln!(self.out)
    }
}
