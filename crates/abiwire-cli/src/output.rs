//! Output formatting

use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Output builder for formatted CLI output
pub struct Output {
    json_mode: bool,
    fields: BTreeMap<String, Value>,
    message: Option<String>,
}

impl Output {
    /// Create a new output builder
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            fields: BTreeMap::new(),
            message: None,
        }
    }

    /// Add a string field to the output
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a u64 field to the output
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a boolean field to the output
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add a JSON value field to the output
    pub fn field_value(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Set the human-readable message
    pub fn message(mut self, msg: &str) -> Self {
        self.message = Some(msg.to_string());
        self
    }

    /// Render the output, if there is anything to show in this mode
    pub fn render(&self) -> Option<String> {
        if self.json_mode {
            serde_json::to_string_pretty(&json!(self.fields)).ok()
        } else {
            self.message.clone()
        }
    }

    /// Print the output
    pub fn print(self) {
        if let Some(text) = self.render() {
            println!("{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message() {
        let output = Output::new(false).field("data", "0x01").message("0x01");
        assert_eq!(output.render().as_deref(), Some("0x01"));
    }

    #[test]
    fn test_render_json() {
        let output = Output::new(true)
            .field("data", "0x01")
            .field_u64("head_width", 32)
            .field_bool("dynamic", true)
            .message("ignored");
        let parsed: Value = serde_json::from_str(&output.render().unwrap()).unwrap();
        assert_eq!(parsed["data"], "0x01");
        assert_eq!(parsed["head_width"], 32);
        assert_eq!(parsed["dynamic"], true);
    }

    #[test]
    fn test_render_without_message() {
        assert!(Output::new(false).field("a", "b").render().is_none());
    }
}
