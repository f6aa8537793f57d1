//! Terminal rendering of scanner diagnostics.
//!
//! Colored terminals get a miette report with the offending source snippet;
//! everything else gets one `file:line:col: ...` line per diagnostic.

use dhicode_core::LineMap;
use dhicode_diagnostics::{Diagnostic, DiagnosticCategory};
use miette::{
    GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, Severity, SourceCode,
};
use std::fmt;
use thiserror::Error;

/// A diagnostic paired with the source it points into.
///
/// The source text is not an error cause, so it must not be a field named
/// `source` (thiserror would treat it as one).
#[derive(Debug, Error)]
#[error("{}", .diagnostic.message_text)]
struct SourceReport<'d> {
    diagnostic: &'d Diagnostic,
    snippet: NamedSource<String>,
}

impl miette::Diagnostic for SourceReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("DHI{}", self.diagnostic.code)))
    }

    fn severity(&self) -> Option<Severity> {
        Some(match self.diagnostic.category {
            DiagnosticCategory::Error => Severity::Error,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.snippet)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.diagnostic.span?;
        let label = LabeledSpan::new(
            Some("here".to_string()),
            span.start as usize,
            span.length as usize,
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Write a graphical report for `diagnostic` over `source`.
pub fn write_report(
    out: &mut impl fmt::Write,
    diagnostic: &Diagnostic,
    source: &str,
    theme: GraphicalTheme,
) -> fmt::Result {
    let name = diagnostic.file.as_deref().unwrap_or("<input>");
    let report = SourceReport {
        diagnostic,
        snippet: NamedSource::new(name, source.to_string()),
    };
    GraphicalReportHandler::new_themed(theme).render_report(out, &report)
}

/// `file:line:col: error DHI1001: message`, with a 1-based position.
pub fn plain_line(diagnostic: &Diagnostic, source: &str, line_map: &LineMap) -> String {
    let mut line = String::new();
    if let Some(ref file) = diagnostic.file {
        line.push_str(file);
        if let Some(span) = diagnostic.span {
            let position = line_map.line_and_column_of(source, span.start);
            line.push_str(&format!(":{}", position));
        }
        line.push_str(": ");
    }
    line.push_str(&format!(
        "{} DHI{}: {}",
        diagnostic.category, diagnostic.code, diagnostic.message_text
    ));
    line
}
