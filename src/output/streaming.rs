//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines as they
//! arrive from `StreamingWalker`, with errors on a separate writer.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::error::TreeError;
use crate::summary::RunSummary;
use crate::tree::{Entry, StreamingOutput, TraversalState};

use super::config::OutputConfig;

/// Streaming output formatter. Tree lines go to `out`, diagnostics to `err`.
pub struct StreamingFormatter<W, E> {
    config: OutputConfig,
    out: W,
    err: E,
}

impl StreamingFormatter<StandardStream, io::Stderr> {
    /// Formatter writing the tree to stdout and errors to stderr.
    pub fn stdio(config: OutputConfig) -> Self {
        let out = StandardStream::stdout(config.color_choice());
        Self::new(config, out, io::stderr())
    }
}

impl<W: WriteColor, E: Write> StreamingFormatter<W, E> {
    pub fn new(config: OutputConfig, out: W, err: E) -> Self {
        Self { config, out, err }
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    fn entry_color(entry: &Entry) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        if entry.is_dir {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
        } else if entry.is_symlink {
            spec.set_fg(Some(Color::Cyan));
        } else {
            return None;
        }
        Some(spec)
    }

    /// Write a name and end the line, coloured if enabled.
    fn write_name(&mut self, name: &str, color: Option<ColorSpec>) -> io::Result<()> {
        match color {
            Some(spec) if self.config.use_color => {
                self.out.set_color(&spec)?;
                write!(self.out, "{}", name)?;
                self.out.reset()?;
                writeln!(self.out)
            }
            _ => writeln!(self.out, "{}", name),
        }
    }
}

impl<W: WriteColor, E: Write> StreamingOutput for StreamingFormatter<W, E> {
    fn output_root(&mut self, root: &Path) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Blue)).set_bold(true);
        self.write_name(&root.display().to_string(), Some(spec))
    }

    fn output_entry(
        &mut self,
        entry: &Entry,
        is_last: bool,
        state: &TraversalState,
    ) -> io::Result<()> {
        let style = self.config.style;
        write!(self.out, "{}{}", style.indent(state), style.connector(is_last))?;
        self.write_name(&entry.name, Self::entry_color(entry))
    }

    fn report_error(&mut self, error: &TreeError) -> io::Result<()> {
        // Keep stdout ahead of the diagnostic on a shared terminal
        self.out.flush()?;
        writeln!(self.err, "twig: {}", error)
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", summary)?;
        self.out.flush()
    }
}
