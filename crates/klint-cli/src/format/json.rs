//! JSON formatter.

use super::Formatter;
use anyhow::Result;
use klint_core::RunResult;
use std::io::Write;

/// Pretty-printed JSON rendering of the full run result.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn render(&self, result: &RunResult, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
        Ok(())
    }
}
