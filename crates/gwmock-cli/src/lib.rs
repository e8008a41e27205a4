//! # gwmock-cli
//!
//! Argument parsing and logging setup for the `gwmock` binary.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target
use anyhow as _;
use dotenvy as _;
use tokio as _;

pub mod commands;
pub mod logging;
pub mod parser;

pub use commands::{Commands, ServeArgs};
pub use logging::init_tracing;
pub use parser::Cli;
