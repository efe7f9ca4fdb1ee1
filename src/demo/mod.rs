//! Workspace integration demo
//!
//! Two free functions with no shared state:
//!
//! - [`main`] - the greeter, writes the demo banner and returns an [`ExecutionResult`]
//! - [`add`] / [`add_values`] - the adder, with a type guard for dynamically typed input

pub mod adder;
pub mod greeter;

pub use adder::{add, add_values, parse_operand, AddRequest};
pub use greeter::{
    format_timestamp, main, run, ExecutionResult, ExecutionStatus, BANNER, COMPLETED_MESSAGE,
    STARTED,
};
