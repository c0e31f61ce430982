//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stock-features")]
#[command(author, version, about = "Technical feature engineering for daily stock panels")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean the raw panel and compute the enriched feature table
    Process(ProcessArgs),
    /// Clean the raw panel without computing features
    Clean(CleanArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct ProcessArgs {
    /// Directory of raw CSV files (overrides config)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output file for the enriched table (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run summary format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(clap::Args)]
pub struct CleanArgs {
    /// Directory of raw CSV files (overrides config)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output file for the cleaned panel (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
