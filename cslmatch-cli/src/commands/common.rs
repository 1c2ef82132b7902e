//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::Args;
use console::style;
use cslmatch::{Diagnostic, Severity};

use crate::runner::LoadedLibrary;

/// Library location overrides shared by every command that loads packages.
#[derive(Debug, Clone, Default, Args)]
pub struct CslArgs {
    /// CSL directory containing the package folders (overrides config)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Relations file (default: related.txt next to the CSL directory)
    #[arg(long)]
    pub related: Option<PathBuf>,

    /// ICAO Doc 8643 file (default: Doc8643.txt next to the CSL directory)
    #[arg(long)]
    pub doc8643: Option<PathBuf>,

    /// Simulator version checked against AIRCRAFT lines (overrides config)
    #[arg(long)]
    pub sim_version: Option<i32>,
}

/// Format one diagnostic for terminal output.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let label = match diagnostic.severity {
        Severity::Info => style("info").dim(),
        Severity::Warning => style("warning").yellow(),
        Severity::Error => style("error").red().bold(),
    };
    format!("{}: {}", label, diagnostic)
}

/// Print a one-line summary of a load, plus diagnostics when `verbose`.
pub fn print_load_summary(library: &LoadedLibrary, verbose: bool) {
    let report = &library.report;
    let warnings = library.diagnostics.count_at_least(Severity::Warning);

    let status = if report.ok {
        style("ok").green()
    } else {
        style("incomplete").yellow()
    };
    println!(
        "{} {} packages, {} models ({} dropped), {} skipped folders, {} diagnostics [{}]",
        style("Loaded").bold(),
        report.packages_added,
        report.models_loaded,
        report.models_dropped,
        report.packages_skipped,
        warnings,
        status
    );

    if verbose {
        for diagnostic in library.diagnostics.diagnostics() {
            println!("  {}", format_diagnostic(&diagnostic));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_diagnostic_includes_location() {
        console::set_colors_enabled(false);
        let diagnostic = Diagnostic::at_line(
            Path::new("/csl/pkg/xsb_aircraft.txt"),
            4,
            "HASGEAR MAYBE",
            "bad value",
        );
        let text = format_diagnostic(&diagnostic);
        assert!(text.starts_with("warning: "));
        assert!(text.contains("/csl/pkg/xsb_aircraft.txt:4"));
    }
}
