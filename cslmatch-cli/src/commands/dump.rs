//! `cslmatch dump` - print every package, model and index entry.

use std::path::PathBuf;

use clap::Args;

use super::common::{print_load_summary, CslArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the dump command.
#[derive(Debug, Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub csl: CslArgs,

    /// Write the dump to a file instead of stdout
    #[arg(short, long, conflicts_with = "log")]
    pub output: Option<PathBuf>,

    /// Write the dump to the log instead of stdout
    #[arg(long)]
    pub log: bool,
}

/// Run the dump command.
pub fn run(runner: &CliRunner, args: DumpArgs) -> Result<(), CliError> {
    let library = runner.load(&args.csl)?;
    if args.log {
        library.session.with_registry(|registry| registry.dump());
        print_load_summary(&library, false);
        println!("Dump written to the log");
        return Ok(());
    }

    let lines = library.session.with_registry(|registry| registry.dump_lines());

    match args.output {
        Some(path) => {
            let mut content = lines.join("\n");
            content.push('\n');
            std::fs::write(&path, content)
                .map_err(|error| CliError::FileWrite { path: path.clone(), error })?;
            print_load_summary(&library, false);
            println!("Dump written to {}", path.display());
        }
        None => {
            for line in &lines {
                println!("{}", line);
            }
            println!();
            print_load_summary(&library, true);
        }
    }
    Ok(())
}
