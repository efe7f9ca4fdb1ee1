//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::{Commands, InventoryArgs};
use crate::demo;
use crate::inventory::{report, CiVerdict, DocumentInventory, InventoryConfig};
use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Add { a, b }) => run_add(&a, &b),
        Some(Commands::Inventory(args)) => run_inventory(args),
        None => {
            // Entry point: run the demo once and discard the result
            let _ = demo::main();
            Ok(())
        }
    }
}

fn run_add(a: &str, b: &str) -> Result<()> {
    let lhs = demo::parse_operand(a);
    let rhs = demo::parse_operand(b);
    debug!("add operands: {} + {}", lhs, rhs);

    let sum = demo::add_values(&lhs, &rhs)?;
    println!("{sum}");
    Ok(())
}

fn run_inventory(args: InventoryArgs) -> Result<()> {
    let config = InventoryConfig::load(args.config.as_deref(), &args.path)
        .context("Failed to load inventory configuration")?;

    let mut inventory = DocumentInventory::new(&args.path, config);
    if let Err(e) = inventory.scan() {
        if matches!(e, crate::Error::NoDocuments(_)) {
            println!("❌ No markdown files found");
        }
        return Err(e.into());
    }

    let summary = inventory.summary();
    let exported = inventory
        .export(&summary, &args.output, args.format, args.baseline)
        .with_context(|| format!("Failed to export inventory to {}", args.output))?;

    if let Some(path) = &exported.csv {
        println!("📊 CSV exported: {}", path.display());
    }
    if let Some(path) = &exported.json {
        println!("📋 JSON exported: {}", path.display());
    }
    if let Some(path) = &exported.baseline {
        println!("📌 Baseline exported: {}", path.display());
    }

    if !args.quiet {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        report::write_report(&mut handle, &summary, inventory.config().report_hotspots)?;
    }

    if args.ci_mode {
        let verdict = CiVerdict::evaluate(&summary, &inventory.config().ci);
        info!("CI verdict: {:?}", verdict);
        if verdict.is_failure() {
            if let Some(message) = verdict.message() {
                println!("\n{message}");
            }
            return Err(anyhow!("CI checks failed"));
        }
    }

    println!(
        "\n✅ Analysis complete. See {}.csv and {}.json for details.",
        args.output, args.output
    );
    Ok(())
}
