//! Lox CLI - command-line driver for the Lox scanner.
//!
//! This is the main entry point for the `lox` binary. It uses clap for
//! argument parsing and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_tokenize, TokenizeArgs};
use config::{Config, OutputFormat};
use error::{DriverError, Result};

/// Lox - tools for the Lox programming language
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the Lox programming language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lox CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a source file and print its tokens
    ///
    /// Prints one token per line as `KIND lexeme literal`, or a JSON array
    /// with `--format json`. Exits with status 65 if the file contains a
    /// lexical error.
    Tokenize(TokenizeCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file to scan
    file: PathBuf,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print each token's byte span
    #[arg(long)]
    spans: bool,
}

/// Main entry point for the lox CLI.
///
/// Scan failures exit with status 65; every other failure with status 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                // The plain `[line N]` message follows the rendered diagnostic.
                DriverError::Scan(_) => eprintln!("{}", err),
                _ => eprintln!("error: {}", err),
            }
            ExitCode::from(err.exit_code())
        },
    }
}

/// Loads configuration, installs logging and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG`, when set, overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
    }
}

/// Execute the tokenize command, letting flags override the config file.
fn execute_tokenize(args: TokenizeCommand, config: Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        file: args.file,
        format: args.format.unwrap_or(config.output.format),
        show_spans: args.spans || config.output.show_spans,
    };
    run_tokenize(tokenize_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_args(cli: Cli) -> TokenizeCommand {
        match cli.command {
            Commands::Tokenize(args) => args,
        }
    }

    #[test]
    fn test_cli_parse_tokenize() {
        let cli = Cli::parse_from(["lox", "tokenize", "main.lox"]);
        let args = tokenize_args(cli);
        assert_eq!(args.file, PathBuf::from("main.lox"));
        assert_eq!(args.format, None);
        assert!(!args.spans);
    }

    #[test]
    fn test_cli_parse_tokenize_with_format() {
        let cli = Cli::parse_from(["lox", "tokenize", "main.lox", "--format", "json"]);
        assert_eq!(tokenize_args(cli).format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_parse_tokenize_with_spans() {
        let cli = Cli::parse_from(["lox", "tokenize", "--spans", "main.lox"]);
        assert!(tokenize_args(cli).spans);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["lox", "tokenize", "main.lox", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["lox", "tokenize"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "lox",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/lox.toml",
            "tokenize",
            "main.lox",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/lox.toml")));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["lox", "tokenize", "main.lox", "-v"]);
        assert!(cli.verbose);
    }
}
