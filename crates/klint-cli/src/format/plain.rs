//! Plain text formatter.

use super::Formatter;
use anyhow::Result;
use klint_core::{ObjectRef, RunResult};
use std::io::Write;

/// Human-readable text output, one paragraph per report.
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn render(&self, result: &RunResult, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "klint {}", result.summary.klint_version)?;
        writeln!(out)?;

        if result.reports.is_empty() {
            writeln!(out, "No lint errors found!")?;
            return Ok(());
        }

        for report in &result.reports {
            writeln!(
                out,
                "{}: (object: {}) {} (check: {}, remediation: {})",
                report.object.file_path.display(),
                object_ident(&report.object),
                report.message,
                report.check,
                report.remediation,
            )?;
            writeln!(out)?;
        }

        Ok(())
    }
}

fn object_ident(object: &ObjectRef) -> String {
    match &object.namespace {
        Some(ns) => format!("{ns}/{} {}", object.name, object.kind),
        None => format!("{} {}", object.name, object.kind),
    }
}
