//! Plain text output formatter

use super::{OutputFormatter, SentenceReport};
use anyhow::Result;
use relkomma_core::apply_suggestion;
use std::io::Write;

/// Plain text formatter
///
/// One line per match in the form
/// `file:sentence:start-end RULE_ID message -> suggestion`, followed by the
/// corrected sentence.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, report: &SentenceReport) -> Result<()> {
        for m in &report.matches {
            writeln!(
                self.writer,
                "{}:{}:{}-{} {} {} -> {}",
                report.file, report.sentence, m.start, m.end, m.rule_id, m.message, m.suggestion
            )?;
            writeln!(self.writer, "    {}", apply_suggestion(&report.text, m))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
