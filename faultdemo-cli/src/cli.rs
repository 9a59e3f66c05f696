//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// faultdemo -- triggers eleven runtime faults and reports each one as caught.
///
/// With no arguments every scenario uses its built-in failing input.
#[derive(Parser, Debug)]
#[command(name = "faultdemo", version, about, long_about = None)]
pub struct Cli {
    /// Optional faultdemo.toml with scenario inputs (default: built-in inputs).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,

    /// Run the full scenario sequence this many times.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per scenario.
    Text,
    /// Machine-readable JSON.
    Json,
}
