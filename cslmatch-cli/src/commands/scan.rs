//! `cslmatch scan` - load a CSL library and summarize it.

use clap::Args;
use console::style;

use super::common::{print_load_summary, CslArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the scan command.
#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub csl: CslArgs,

    /// Print every diagnostic, not just the count
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the scan command.
pub fn run(runner: &CliRunner, args: ScanArgs) -> Result<(), CliError> {
    let library = runner.load(&args.csl)?;

    println!("{}", style("CSL library").bold().underlined());
    println!("  Directory:  {}", library.paths.root.display());
    println!("  Relations:  {}", library.paths.related_file.display());
    println!("  Doc 8643:   {}", library.paths.doc8643_file.display());
    println!(
        "  Simulator:  {}",
        args.csl.sim_version.unwrap_or(runner.config().host.sim_version)
    );
    println!("  Default:    {}", library.session.default_icao());
    println!();

    library.session.with_registry(|registry| {
        for package in registry.packages() {
            println!(
                "  {:<24} {:>5} models  {}",
                style(&package.name).cyan(),
                package.models().len(),
                package.path.display()
            );
        }
        println!();
        println!(
            "  {} ICAO types grouped, {} aircraft codes",
            registry.groupings().len(),
            registry.codes().len()
        );
    });
    println!();

    print_load_summary(&library, args.verbose);
    Ok(())
}
