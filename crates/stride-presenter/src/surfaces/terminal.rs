use std::io::Write;

use stride_core::traits::{IRenderSurface, Region};
use tracing::warn;

/// Prints each region update to a writer, every line tagged with the region id.
pub struct TerminalSurface<W: Write> {
    writer: W,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_lines(&mut self, region: Region, content: &str) -> std::io::Result<()> {
        for line in content.lines() {
            writeln!(self.writer, "[{region}] {line}")?;
        }
        self.writer.flush()
    }
}

impl<W: Write> IRenderSurface for TerminalSurface<W> {
    fn write_region(&mut self, region: Region, content: &str) {
        if let Err(e) = self.write_lines(region, content) {
            warn!(region = %region, error = %e, "failed to write to terminal surface");
        }
    }
}
