//! # Workspace Demo
//!
//! A small workspace integration demo plus a Markdown documentation inventory.
//!
//! ## Usage
//!
//! ```bash
//! workspace-demo                      # print the demo banner
//! workspace-demo add 2 3              # guarded addition
//! workspace-demo inventory --path docs [--format csv|json|both] [--ci-mode]
//! ```
//!
//! ## Modules
//!
//! - `demo` - The greeter entry point and the guarded adder
//! - `inventory` - Markdown document scanning, summaries and exports
//! - `scoring` - Document complexity scoring and issue detection
//! - `cli` - Command-line argument structures and routing
//! - `error` - Crate error type
pub mod cli;
pub mod demo;
pub mod error;
pub mod inventory;
pub mod scoring;


pub use demo::{add, add_values, main, ExecutionResult};
pub use error::{Error, Result};
