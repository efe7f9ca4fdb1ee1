//! CLI argument structures
//!
//! This module defines the command-line interface: the main CLI structure
//! and its subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::inventory::OutputFormat;

/// Workspace integration demo
#[derive(Parser)]
#[command(name = "workspace-demo")]
#[command(about = "workspace-demo - Workspace integration demo and document inventory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add two numbers (operands are read as JSON values)
    #[command(name = "add")]
    Add {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: String,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: String,
    },

    /// Analyze Markdown documentation complexity
    #[command(name = "inventory")]
    Inventory(InventoryArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct InventoryArgs {
    /// Root path to scan
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Output filename prefix
    #[arg(long, default_value = "doc_inventory")]
    pub output: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Both)]
    pub format: OutputFormat,

    /// Quiet mode (no summary report)
    #[arg(long)]
    pub quiet: bool,

    /// CI mode (exit code 1 if critical issues found)
    #[arg(long)]
    pub ci_mode: bool,

    /// Also write <output>.baseline.json for later comparison
    #[arg(long)]
    pub baseline: bool,

    /// Path to configuration file (defaults to <path>/.doc-inventory.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_demo() {
        let cli = Cli::try_parse_from(["workspace-demo"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_add_accepts_negative_operands() {
        let cli = Cli::try_parse_from(["workspace-demo", "add", "-10", "5"]).unwrap();
        match cli.command {
            Some(Commands::Add { a, b }) => {
                assert_eq!(a, "-10");
                assert_eq!(b, "5");
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_inventory_defaults() {
        let cli = Cli::try_parse_from(["workspace-demo", "inventory"]).unwrap();
        match cli.command {
            Some(Commands::Inventory(args)) => {
                assert_eq!(args.path, PathBuf::from("."));
                assert_eq!(args.output, "doc_inventory");
                assert_eq!(args.format, OutputFormat::Both);
                assert!(!args.quiet);
                assert!(!args.ci_mode);
                assert!(!args.baseline);
                assert!(args.config.is_none());
            }
            _ => panic!("expected inventory command"),
        }
    }

    #[test]
    fn test_inventory_flags() {
        let cli = Cli::try_parse_from([
            "workspace-demo",
            "-vv",
            "inventory",
            "--path",
            "docs",
            "--format",
            "csv",
            "--quiet",
            "--ci-mode",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Inventory(args)) => {
                assert_eq!(args.path, PathBuf::from("docs"));
                assert_eq!(args.format, OutputFormat::Csv);
                assert!(args.quiet);
                assert!(args.ci_mode);
            }
            _ => panic!("expected inventory command"),
        }
    }

    #[test]
    fn test_inventory_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["workspace-demo", "inventory", "--format", "xml"]).is_err());
    }
}
