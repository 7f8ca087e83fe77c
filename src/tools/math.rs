use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

/// Adds two integers.
pub struct Adder;

#[derive(Debug, Deserialize)]
struct AddArgs {
    a: i64,
    b: i64,
}

impl Adder {
    /// Total over all of `i64`; out-of-range sums wrap.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }
}

#[async_trait::async_trait]
impl Tool for Adder {
    fn name(&self) -> &str {
        "add"
    }

    fn description(&self) -> &str {
        "Add two numbers"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "a": { "type": "integer" },
                "b": { "type": "integer" }
            },
            "required": ["a", "b"]
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        let args: AddArgs = serde_json::from_value(args)
            .context("Invalid arguments for add")?;
        Ok(json!(self.add(args.a, args.b)))
    }
}
