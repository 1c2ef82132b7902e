//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`dump`] - Full registry listing
//! - [`resolve`] - Resolve one aircraft (`cslmatch match`)
//! - [`scan`] - Load a library and summarize it

pub mod common;
pub mod config;
pub mod dump;
pub mod resolve;
pub mod scan;
