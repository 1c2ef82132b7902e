//! `cslmatch match` - resolve an aircraft to a model.

use clap::Args;
use console::style;
use cslmatch::Resolution;
use serde_json::json;

use super::common::{print_load_summary, CslArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the match command.
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// ICAO type designator, e.g. B738
    pub icao: String,

    /// Airline ICAO code, e.g. SWA
    #[arg(long, default_value = "")]
    pub airline: String,

    /// Livery code
    #[arg(long, default_value = "")]
    pub livery: String,

    /// Do not fall back to the configured default type
    #[arg(long)]
    pub no_default: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub csl: CslArgs,
}

/// JSON document describing a resolution.
fn match_json(args: &MatchArgs, found: &Resolution) -> serde_json::Value {
    json!({
        "icao": args.icao,
        "airline": args.airline,
        "livery": args.livery,
        "quality": found.quality.as_i32(),
        "found_by": found.quality.to_string(),
        "package": found.package_name,
        "model_name": found.model.model_name(),
        "model": found.model,
    })
}

/// Run the match command.
pub fn run(runner: &CliRunner, args: MatchArgs) -> Result<(), CliError> {
    let library = runner.load(&args.csl)?;
    if !args.json {
        print_load_summary(&library, false);
        println!();
    }

    let found = library
        .session
        .resolve(&args.icao, &args.airline, &args.livery, !args.no_default)
        .ok_or_else(|| CliError::NoMatch {
            icao: args.icao.clone(),
        })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&match_json(&args, &found))?);
        return Ok(());
    }

    let model = &found.model;
    println!(
        "{} {} ({}, quality {})",
        style("Matched").green().bold(),
        style(model.model_name()).bold(),
        found.quality,
        found.quality.as_i32()
    );
    println!("  Package:  {}", found.package_name);
    println!("  Kind:     {}", model.kind());
    println!("  File:     {}", model.file_path());
    if !model.icao.is_empty() {
        println!("  Tagged:   {}", model.mtl_code());
    }
    if let Some(texture) = model.texture_path() {
        println!("  Texture:  {}", texture);
    }
    for attachment in model.attachments() {
        println!(
            "  Attach:   {} {}",
            attachment.layer.keyword(),
            attachment.source_file
        );
    }
    Ok(())
}
