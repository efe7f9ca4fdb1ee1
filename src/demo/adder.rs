//! Guarded addition
//!
//! [`add`] is the statically typed path. [`add_values`] is the guard used
//! wherever operands arrive untyped (CLI arguments, deserialized requests).

use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Sum two numbers with IEEE-754 semantics
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Sum two untyped operands, rejecting anything that is not a number
pub fn add_values(a: &Value, b: &Value) -> Result<f64> {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => Ok(add(a, b)),
        _ => Err(Error::InvalidArgumentType),
    }
}

/// Interpret a raw command-line operand
///
/// Valid JSON keeps its JSON type, so `3` is a number while `"3"` and
/// `null` are not. Any other text becomes a string value.
pub fn parse_operand(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Addition request decoded from JSON; a missing operand decodes as `null`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddRequest {
    #[serde(default)]
    pub a: Value,
    #[serde(default)]
    pub b: Value,
}

impl AddRequest {
    pub fn sum(&self) -> Result<f64> {
        add_values(&self.a, &self.b)
    }
}
