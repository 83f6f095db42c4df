//! Command-line interface for text-converter.
//!
//! `convert` runs one conversion over text from the arguments or stdin;
//! `list` prints the commands a host would register.

use crate::host::{CommandRegistry, run_conversion};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::PathBuf;
use text_converter_config::Config;
use text_converter_core::ConversionKind;

/// text-converter - Convert text between casing conventions
#[derive(Debug, Parser)]
#[command(name = "text-converter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Config file to use instead of ~/.config/text-converter/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text with the given conversion (e.g. camel, toSnakeCase, KebabCase)
    Convert {
        /// Conversion to apply
        #[arg(value_name = "KIND")]
        kind: String,

        /// Convert each line separately, keeping line breaks
        #[arg(long)]
        per_line: bool,

        /// Text to convert (joined with spaces); read from stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// List the registered conversion commands
    List,
}

/// Load the config named on the command line, or the default one.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Execute the parsed command, reading stdin from `input` and writing to `output`.
pub fn run(cli: &Cli, config: &Config, input: &mut dyn Read, output: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Commands::Convert {
            kind,
            per_line,
            text,
        } => {
            let kind: ConversionKind = kind.parse()?;
            let (source, from_args) = if text.is_empty() {
                let mut buf = String::new();
                input.read_to_string(&mut buf)?;
                (buf, false)
            } else {
                (text.join(" "), true)
            };

            log::info!(
                "Converting {} bytes from {} with {:?}",
                source.len(),
                if from_args { "arguments" } else { "stdin" },
                kind
            );
            let converted = run_conversion(kind, &source, *per_line)?;
            output.write_all(converted.as_bytes())?;
            if from_args {
                writeln!(output)?;
            }
        }
        Commands::List => {
            let registry = CommandRegistry::from_config(config);
            for command in registry.commands() {
                writeln!(
                    output,
                    "{:<32} {:<12} {}",
                    command.id,
                    command.kind.display_name(),
                    command.kind.description()
                )?;
            }
        }
    }
    output.flush()?;
    Ok(())
}
