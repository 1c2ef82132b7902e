//! Diagnostic reporting for package loading.
//!
//! Parsing never aborts the overall load. Problems are reported through a
//! [`DiagnosticSink`] carrying the file, line number, offending line text and a
//! message, and the loader carries on with the next line or package.

use std::fmt;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational progress message.
    Info,
    /// Something was ignored or discarded.
    Warning,
    /// A package or reference file could not be used.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single load diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// File the diagnostic refers to, if any.
    pub path: Option<PathBuf>,
    /// 1-based line number within `path`.
    pub line: Option<usize>,
    /// Text of the offending line.
    pub text: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic without file context.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            path: None,
            line: None,
            text: None,
            message: message.into(),
        }
    }

    /// Warning tied to a specific manifest line.
    pub fn at_line(
        path: &Path,
        line: usize,
        text: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            path: Some(path.to_path_buf()),
            line: Some(line),
            text: Some(text.into()),
            message: message.into(),
        }
    }

    /// Attach a file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.path, self.line) {
            (Some(path), Some(line)) => write!(f, "{}:{}: {}", path.display(), line, self.message)?,
            (Some(path), None) => write!(f, "{}: {}", path.display(), self.message)?,
            _ => write!(f, "{}", self.message)?,
        }
        if let Some(text) = &self.text {
            write!(f, " [{}]", text)?;
        }
        Ok(())
    }
}

/// One-way sink for load diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        let path = diagnostic
            .path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let line = diagnostic.line.unwrap_or(0);
        let text = diagnostic.text.as_deref().unwrap_or("");
        match diagnostic.severity {
            Severity::Info => {
                tracing::info!(path = %path, line, "{}", diagnostic.message)
            }
            Severity::Warning => {
                tracing::warn!(path = %path, line, text = %text, "{}", diagnostic.message)
            }
            Severity::Error => {
                tracing::error!(path = %path, line, text = %text, "{}", diagnostic.message)
            }
        }
    }
}

/// Records diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Number of diagnostics at or above `severity`.
    pub fn count_at_least(&self, severity: Severity) -> usize {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.severity >= severity)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Drain the recorded diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}

/// Fan a diagnostic out to two sinks.
pub struct TeeSink<'a> {
    first: &'a dyn DiagnosticSink,
    second: &'a dyn DiagnosticSink,
}

impl<'a> TeeSink<'a> {
    pub fn new(first: &'a dyn DiagnosticSink, second: &'a dyn DiagnosticSink) -> Self {
        Self { first, second }
    }
}

impl DiagnosticSink for TeeSink<'_> {
    fn report(&self, diagnostic: Diagnostic) {
        self.first.report(diagnostic.clone());
        self.second.report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line() {
        let d = Diagnostic::at_line(
            Path::new("/csl/pkg/xsb_aircraft.txt"),
            12,
            "HASGEAR MAYBE",
            "HASGEAR takes YES or NO",
        );
        assert_eq!(
            d.to_string(),
            "/csl/pkg/xsb_aircraft.txt:12: HASGEAR takes YES or NO [HASGEAR MAYBE]"
        );
    }

    #[test]
    fn test_display_without_path() {
        let d = Diagnostic::new(Severity::Error, "could not open related.txt");
        assert_eq!(d.to_string(), "could not open related.txt");
    }

    #[test]
    fn test_collecting_sink_counts() {
        let sink = CollectingSink::new();
        sink.report(Diagnostic::new(Severity::Info, "loading"));
        sink.report(Diagnostic::new(Severity::Warning, "bad line"));
        sink.report(Diagnostic::new(Severity::Error, "missing file"));

        assert_eq!(sink.diagnostics().len(), 3);
        assert_eq!(sink.count_at_least(Severity::Warning), 2);
        assert_eq!(sink.count_at_least(Severity::Error), 1);

        let drained = sink.take();
        assert_eq!(drained.len(), 3);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_tee_sink_reports_to_both() {
        let a = CollectingSink::new();
        let b = CollectingSink::new();
        TeeSink::new(&a, &b).report(Diagnostic::new(Severity::Warning, "x"));

        assert_eq!(a.diagnostics().len(), 1);
        assert_eq!(b.diagnostics().len(), 1);
    }
}
