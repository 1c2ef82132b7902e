//! `xsb_aircraft.txt` manifest parsing.
//!
//! A manifest is a line-oriented list of commands:
//!
//! ```text
//! EXPORT_NAME __Bluebell
//! DEPENDENCY __B738
//!
//! OBJ8_AIRCRAFT B738_SWA
//! OBJ8 SOLID YES __Bluebell/B738/b738.obj __Bluebell/B738/SWA.png
//! LIVERY B738 SWA SHAMU
//! ```
//!
//! Packages are read in two passes: [`parse_header`] for every package first,
//! then [`parse_package`] once all names are registered.

mod commands;
mod parser;
mod tokenizer;

pub use commands::{
    find_command, Command, CommandError, ErrorScope, PackageBuilder, PackageContents,
    FULL_PASS_COMMANDS,
};
pub use parser::{parse_header, parse_package, FullPassSummary, ParseContext};
pub use tokenizer::{manifest_lines, tokenize, MANIFEST_SEPARATORS};
