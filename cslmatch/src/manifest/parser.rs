//! Two-pass manifest parser.
//!
//! The header pass only looks for `EXPORT_NAME`, so that every package name
//! is known before any path is substituted. The full pass then runs every
//! line through the command table.

use std::path::Path;

use super::commands::{find_command, CommandError, ErrorScope, PackageBuilder};
use super::tokenizer::{manifest_lines, tokenize, MANIFEST_SEPARATORS};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::host::HostEnvironment;
use crate::package::{Package, PackageRoots};
use crate::tables::GroupingTable;

/// Everything the full pass reads besides the manifest text.
pub struct ParseContext<'a> {
    /// Manifest file, used in diagnostics.
    pub manifest_path: &'a Path,
    /// All registered packages, including the one being parsed.
    pub roots: &'a PackageRoots,
    pub groupings: &'a GroupingTable,
    pub host: &'a dyn HostEnvironment,
    pub sink: &'a dyn DiagnosticSink,
}

/// Outcome of a package's full pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullPassSummary {
    /// Models kept in the package.
    pub models: usize,
    /// Models discarded because of errors.
    pub dropped: usize,
    /// Lines that failed.
    pub errors: usize,
    /// Whether the pass stopped before the end of the manifest.
    pub aborted: bool,
}

/// Non-blank, non-comment lines with their 1-based line numbers.
fn command_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    manifest_lines(content)
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Read the package header.
///
/// Returns a package without models once an `EXPORT_NAME` line is accepted.
/// A name already exported by one of `known` is rejected and the scan goes
/// on with the next line. Returns `None` when no name was accepted.
pub fn parse_header(
    content: &str,
    package_dir: &Path,
    manifest_path: &Path,
    known: &PackageRoots,
    sink: &dyn DiagnosticSink,
) -> Option<Package> {
    for (line_number, line) in command_lines(content) {
        let tokens = tokenize(line, MANIFEST_SEPARATORS, 0);
        if tokens.first() != Some(&"EXPORT_NAME") {
            continue;
        }
        if tokens.len() != 2 {
            sink.report(Diagnostic::at_line(
                manifest_path,
                line_number,
                line,
                "EXPORT_NAME command requires 1 argument",
            ));
            continue;
        }

        let name = tokens[1];
        if let Some(existing) = known.iter().find(|root| root.name == name) {
            sink.report(Diagnostic::at_line(
                manifest_path,
                line_number,
                line,
                format!(
                    "package name {} already in use by {} requested by {}",
                    name,
                    existing.path,
                    package_dir.display()
                ),
            ));
            continue;
        }

        tracing::debug!(name, path = %package_dir.display(), "Found package header");
        return Some(Package::new(name, package_dir));
    }

    None
}

/// Run the full pass over `content`, replacing the models of `package`.
pub fn parse_package(package: &mut Package, content: &str, ctx: &ParseContext<'_>) -> FullPassSummary {
    let folder_name = package.folder_name();
    let mut builder = PackageBuilder::new(ctx.roots, &folder_name, ctx.groupings, ctx.host);
    let mut summary = FullPassSummary::default();

    for (line_number, line) in command_lines(content) {
        let Some(&name) = tokenize(line, MANIFEST_SEPARATORS, 0).first() else {
            continue;
        };

        let result = match find_command(name) {
            Some(command) => command.run(&mut builder, line),
            None => Err(CommandError::UnknownCommand(name.to_string())),
        };
        let Err(error) = result else {
            continue;
        };

        summary.errors += 1;
        ctx.sink.report(Diagnostic::at_line(
            ctx.manifest_path,
            line_number,
            line,
            error.to_string(),
        ));

        match error.scope() {
            ErrorScope::Model => builder.flag_current(),
            ErrorScope::Package => {
                builder.flag_current();
                summary.aborted = true;
                break;
            }
            ErrorScope::Dependency => {
                builder.discard_all();
                summary.aborted = true;
                break;
            }
        }
    }

    let contents = builder.finish();
    summary.models = contents.models.len();
    summary.dropped = contents.dropped;
    if summary.errors > 0 {
        tracing::debug!(
            package = %package.name,
            errors = summary.errors,
            dropped = summary.dropped,
            "Dropped models with errors"
        );
    }
    package.set_contents(contents.models, contents.indices);

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::host::StaticHost;
    use crate::matching::tier;
    use crate::package::PackageRoot;

    const MANIFEST: &str = "\
# Bluebell Boeing 737
EXPORT_NAME __Bluebell

OBJECT __Bluebell/B738/b738.obj
TEXTURE __Bluebell/B738/SWA.png
  LIVERY B738 SWA SHAMU
ICAO B738
";

    fn roots() -> PackageRoots {
        vec![PackageRoot::new("__Bluebell", "/csl/Bluebell")]
            .into_iter()
            .collect()
    }

    fn full_pass(content: &str, sink: &CollectingSink) -> (Package, FullPassSummary) {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let ctx = ParseContext {
            manifest_path: Path::new("/csl/Bluebell/xsb_aircraft.txt"),
            roots: &roots,
            groupings: &groups,
            host: &host,
            sink,
        };
        let mut package = Package::new("__Bluebell", "/csl/Bluebell");
        let summary = parse_package(&mut package, content, &ctx);
        (package, summary)
    }

    #[test]
    fn test_header_finds_export_name() {
        let sink = CollectingSink::new();
        let package = parse_header(
            MANIFEST,
            Path::new("/csl/Bluebell"),
            Path::new("/csl/Bluebell/xsb_aircraft.txt"),
            &PackageRoots::new(),
            &sink,
        )
        .unwrap();
        assert_eq!(package.name, "__Bluebell");
        assert_eq!(package.path(), Path::new("/csl/Bluebell"));
        assert!(package.models().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_header_without_name() {
        let sink = CollectingSink::new();
        let content = "OBJECT a/b.obj\nEXPORT_NAME\n";
        let package = parse_header(
            content,
            Path::new("/csl/x"),
            Path::new("/csl/x/xsb_aircraft.txt"),
            &PackageRoots::new(),
            &sink,
        );
        assert!(package.is_none());
        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, Some(2));
    }

    #[test]
    fn test_header_rejects_taken_name() {
        let sink = CollectingSink::new();
        let content = "EXPORT_NAME __Bluebell\nEXPORT_NAME __Bluebell2\n";
        let package = parse_header(
            content,
            Path::new("/csl/copy"),
            Path::new("/csl/copy/xsb_aircraft.txt"),
            &roots(),
            &sink,
        )
        .unwrap();
        assert_eq!(package.name, "__Bluebell2");
        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("/csl/Bluebell"));
    }

    #[test]
    fn test_full_pass_builds_model() {
        let sink = CollectingSink::new();
        let (package, summary) = full_pass(MANIFEST, &sink);

        assert!(sink.is_empty(), "{:?}", sink.diagnostics());
        assert_eq!(summary.models, 1);
        assert!(!summary.aborted);

        let model = package.model(0).unwrap();
        assert_eq!(model.dir_names, vec!["Bluebell", "B738"]);
        assert_eq!(model.texture_name, "SWA");
        assert_eq!(model.icao, "B738");
        assert_eq!(package.lookup(tier::ICAO_AIRLINE_LIVERY, "B738 SWA SHAMU").unwrap().0, 0);
        assert_eq!(package.lookup(tier::ICAO, "B738").unwrap().0, 0);
    }

    #[test]
    fn test_unknown_command_drops_model() {
        let sink = CollectingSink::new();
        let content = "\
OBJ8_AIRCRAFT first
ICAO A320
WINGSPAN 34
OBJ8_AIRCRAFT second
ICAO A321
";
        let (package, summary) = full_pass(content, &sink);

        assert_eq!(summary.errors, 1);
        assert_eq!(summary.dropped, 1);
        assert_eq!(package.models().len(), 1);
        assert!(package.lookup(tier::ICAO, "A320").is_none());
        assert_eq!(package.lookup(tier::ICAO, "A321").unwrap().0, 0);

        let diagnostic = &sink.diagnostics()[0];
        assert_eq!(diagnostic.line, Some(3));
        assert_eq!(diagnostic.text.as_deref(), Some("WINGSPAN 34"));
    }

    #[test]
    fn test_missing_dependency_discards_package() {
        let sink = CollectingSink::new();
        let content = "\
OBJ8_AIRCRAFT first
ICAO A320
DEPENDENCY __Missing
OBJ8_AIRCRAFT second
";
        let (package, summary) = full_pass(content, &sink);

        assert!(summary.aborted);
        assert!(package.models().is_empty());
        assert!(package.index(tier::ICAO).is_empty());
    }

    #[test]
    fn test_unresolved_path_stops_parsing() {
        let sink = CollectingSink::new();
        let content = "\
OBJECT __Bluebell/A320/a320.obj
ICAO A320
OBJECT __Elsewhere/A321/a321.obj
ICAO A321
OBJECT __Bluebell/A319/a319.obj
";
        let (package, summary) = full_pass(content, &sink);

        assert!(summary.aborted);
        assert_eq!(summary.errors, 1);
        assert_eq!(package.models().len(), 1);
        assert_eq!(package.models()[0].object_name, "a320");
    }

    #[test]
    fn test_path_with_spaces() {
        let sink = CollectingSink::new();
        let content = "OBJECT __Bluebell/My Planes/a 320.obj\n";
        let (package, _) = full_pass(content, &sink);
        let model = package.model(0).unwrap();
        assert_eq!(model.file_path(), "/csl/Bluebell/My Planes/a 320.obj");
        assert_eq!(model.object_name, "a 320");
    }
}
